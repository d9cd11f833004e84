use crate::{
    action::{Action, ActionRequestQueue, InputAction, SettingsAction},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::Input(action) => action.execute(app_state),
        Action::Settings(action) => action.execute(app_state, ui_state),
    }
    sync_readout(app_state, ui_state);
}

/// Recomputes the readout and points the animations at it.
///
/// Without a result the meter empties at once; only the color fades.
fn sync_readout(app_state: &mut AppState, ui_state: &mut UiState) {
    if app_state.refresh_readout() {
        let readout = app_state.readout();
        log::debug!("readout: {} ({})", readout.value_text(), readout.message());
    }
    let readout = app_state.readout();
    if readout.result().is_some() {
        ui_state.driver.retarget(
            readout.meter_percent(&app_state.settings.meter),
            readout.target_color(),
        );
    } else {
        ui_state.driver.clear(readout.target_color());
    }
}

impl InputAction {
    fn execute(self, app_state: &mut AppState) {
        match self {
            InputAction::SetWeightText(text) => app_state.weight_text = text,
            InputAction::SetHeightText(text) => app_state.height_text = text,
            InputAction::SelectUnitSystem(unit_system) => app_state.unit_system = unit_system,
            InputAction::ToggleUnitSystem => {
                app_state.unit_system = app_state.unit_system.toggled();
            }
            InputAction::ClearInputs => {
                app_state.weight_text.clear();
                app_state.height_text.clear();
            }
        }
    }
}

impl SettingsAction {
    fn execute(self, app_state: &mut AppState, ui_state: &mut UiState) {
        match self {
            SettingsAction::UpdateSettings(settings) => {
                if settings.animation != app_state.settings.animation {
                    ui_state.driver.reconfigure(&settings.animation);
                }
                app_state.settings = settings;
            }
        }
    }
}
