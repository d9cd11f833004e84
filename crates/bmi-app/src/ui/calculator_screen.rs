use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        info_panel,
        input_form::{self, InputFormViewModel},
        result_panel::{self, ResultPanelViewModel},
        settings_panel::{self, SettingsViewModel},
        theme,
    },
};

const CONTENT_WIDTH: f32 = 340.0;

#[derive(Debug, Clone)]
pub(crate) struct CalculatorScreenViewModel<'a> {
    pub(crate) input_form: InputFormViewModel<'a>,
    pub(crate) result_panel: ResultPanelViewModel,
    pub(crate) settings: SettingsViewModel<'a>,
    pub(crate) version: &'a str,
}

impl<'a> CalculatorScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        input_form: InputFormViewModel<'a>,
        result_panel: ResultPanelViewModel,
        settings: SettingsViewModel<'a>,
        version: &'a str,
    ) -> Self {
        Self {
            input_form,
            result_panel,
            settings,
            version,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CalculatorScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    let width = ui.available_width().min(CONTENT_WIDTH);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    theme::panel_frame().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("BMI Calculator")
                                    .size(28.0)
                                    .color(theme::TEXT),
                            );
                        });
                        ui.add_space(20.0);
                        input_form::show(ui, &vm.input_form, action_queue);
                        ui.add_space(25.0);
                        result_panel::show(ui, &vm.result_panel);
                        ui.add_space(15.0);
                        info_panel::show(ui);
                        ui.add_space(15.0);
                        settings_panel::show(ui, &vm.settings, action_queue);
                    });
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        ui.small(RichText::new(format!("v{}", vm.version)).color(theme::LABEL));
                    });
                });
            });
            strip.empty();
        });
}
