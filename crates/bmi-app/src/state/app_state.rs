use bmi_core::UnitSystem;

use crate::{readout::Readout, state::Settings};

/// The calculator's input and the readout derived from it.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) weight_text: String,
    pub(crate) height_text: String,
    pub(crate) unit_system: UnitSystem,
    pub(crate) settings: Settings,
    readout: Readout,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            weight_text: String::new(),
            height_text: String::new(),
            unit_system: UnitSystem::default(),
            settings,
            readout: Readout::Empty,
        }
    }

    #[must_use]
    pub(crate) fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Re-evaluates the readout from the current input.
    ///
    /// Returns `true` if it differs from the previous one.
    pub(crate) fn refresh_readout(&mut self) -> bool {
        let readout = Readout::evaluate(&self.weight_text, &self.height_text, self.unit_system);
        if readout == self.readout {
            return false;
        }
        self.readout = readout;
        true
    }
}
