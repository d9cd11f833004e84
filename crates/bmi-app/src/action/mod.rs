use std::mem;

use bmi_core::UnitSystem;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Input(InputAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum InputAction {
    SetWeightText(String),
    SetHeightText(String),
    SelectUnitSystem(UnitSystem),
    ToggleUnitSystem,
    ClearInputs,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
