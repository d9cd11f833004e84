use crate::{animation_driver::AnimationDriver, palette, state::Settings, version};

// UiState holds ephemeral presentation state (running animations, footer text). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) driver: AnimationDriver,
    pub(crate) version: String,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            driver: AnimationDriver::new(&settings.animation, palette::ACCENT),
            version: version::build_version(),
        }
    }
}
