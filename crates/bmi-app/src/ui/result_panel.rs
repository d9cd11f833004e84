use bmi_animate::Rgb;
use eframe::egui::{RichText, Ui};

use crate::ui::{
    meter::{self, MeterViewModel},
    theme,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResultPanelViewModel {
    pub(crate) value_text: String,
    pub(crate) message: String,
    pub(crate) color: Rgb,
    pub(crate) meter: MeterViewModel,
}

impl ResultPanelViewModel {
    #[must_use]
    pub(crate) fn new(
        value_text: String,
        message: String,
        color: Rgb,
        meter: MeterViewModel,
    ) -> Self {
        Self {
            value_text,
            message,
            color,
            meter,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ResultPanelViewModel) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&vm.value_text)
                .size(36.0)
                .strong()
                .color(theme::color32(vm.color)),
        );
        ui.add_space(10.0);
        ui.label(RichText::new(&vm.message).size(14.0).color(theme::TEXT));
        ui.add_space(15.0);
        meter::show(ui, &vm.meter);
    });
}
