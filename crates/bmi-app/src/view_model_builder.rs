use bmi_core::BmiResult;

use crate::{
    state::{AppState, UiState},
    ui::{
        calculator_screen::CalculatorScreenViewModel, input_form::InputFormViewModel,
        meter::MeterViewModel, result_panel::ResultPanelViewModel,
        settings_panel::SettingsViewModel,
    },
};

#[must_use]
pub(crate) fn build_calculator_screen_vm<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
) -> CalculatorScreenViewModel<'a> {
    CalculatorScreenViewModel::new(
        build_input_form_vm(app_state),
        build_result_panel_vm(app_state, ui_state),
        SettingsViewModel::new(&app_state.settings),
        &ui_state.version,
    )
}

#[must_use]
fn build_input_form_vm(app_state: &AppState) -> InputFormViewModel<'_> {
    InputFormViewModel::new(
        &app_state.weight_text,
        &app_state.height_text,
        app_state.unit_system,
    )
}

/// The value and message follow the readout immediately; the color and meter
/// follow the animation, and the meter caption appears once the meter settles.
#[must_use]
fn build_result_panel_vm(app_state: &AppState, ui_state: &UiState) -> ResultPanelViewModel {
    let readout = app_state.readout();
    let frame = ui_state.driver.frame();
    let caption = if ui_state.driver.meter_is_idle() {
        readout
            .result()
            .map(BmiResult::display_value)
            .unwrap_or_default()
    } else {
        String::new()
    };

    ResultPanelViewModel::new(
        readout.value_text(),
        readout.message(),
        frame.color,
        MeterViewModel::new(frame.meter, caption, frame.color),
    )
}
