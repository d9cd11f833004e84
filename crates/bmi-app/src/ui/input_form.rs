use bmi_core::UnitSystem;
use eframe::egui::{ComboBox, Grid, RichText, TextEdit, Ui};

use crate::{
    action::{ActionRequestQueue, InputAction},
    ui::theme,
};

const SELECTOR_WIDTH: f32 = 250.0;
const FIELD_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub(crate) struct InputFormViewModel<'a> {
    weight_text: &'a str,
    height_text: &'a str,
    unit_system: UnitSystem,
}

impl<'a> InputFormViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        weight_text: &'a str,
        height_text: &'a str,
        unit_system: UnitSystem,
    ) -> Self {
        Self {
            weight_text,
            height_text,
            unit_system,
        }
    }
}

/// Shows a labelled text field and returns the new text if it was edited.
fn measurement_field(ui: &mut Ui, label: &str, text: &str, unit: &str) -> Option<String> {
    ui.label(RichText::new(label).color(theme::LABEL));
    let mut edited = text.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut edited)
            .hint_text(unit)
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();
    response.changed().then_some(edited)
}

pub(crate) fn show(ui: &mut Ui, vm: &InputFormViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        let mut unit_system = vm.unit_system;
        ComboBox::from_id_salt("unit_system")
            .width(SELECTOR_WIDTH)
            .selected_text(unit_system.to_string())
            .show_ui(ui, |ui| {
                for unit in UnitSystem::ALL {
                    ui.selectable_value(&mut unit_system, unit, unit.to_string());
                }
            });
        if unit_system != vm.unit_system {
            action_queue.request(InputAction::SelectUnitSystem(unit_system));
        }
    });

    ui.add_space(25.0);

    Grid::new("measurement_fields")
        .num_columns(2)
        .spacing([10.0, 15.0])
        .show(ui, |ui| {
            let unit_system = vm.unit_system;
            if let Some(text) =
                measurement_field(ui, "Weight:", vm.weight_text, unit_system.weight_unit())
            {
                action_queue.request(InputAction::SetWeightText(text));
            }
            if let Some(text) =
                measurement_field(ui, "Height:", vm.height_text, unit_system.height_unit())
            {
                action_queue.request(InputAction::SetHeightText(text));
            }
        });
}
