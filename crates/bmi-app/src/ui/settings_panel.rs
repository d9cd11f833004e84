use eframe::egui::{CollapsingHeader, Ui};

use crate::{
    action::{ActionRequestQueue, SettingsAction},
    state::{AnimationSettings, Settings},
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel<'a> {
    settings: &'a Settings,
}

impl<'a> SettingsViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = vm.settings.clone();
    let Settings { animation, meter: _ } = &mut settings;

    CollapsingHeader::new("Settings")
        .default_open(false)
        .show(ui, |ui| {
            let AnimationSettings { enabled, .. } = animation;
            changed |= ui.checkbox(enabled, "Animate transitions").changed();
        });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings));
    }
}
