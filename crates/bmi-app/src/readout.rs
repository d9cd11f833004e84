//! Adapter between the raw input fields and the BMI engine.

use bmi_animate::Rgb;
use bmi_core::{BmiResult, Measurement, PLACEHOLDER, UnitSystem};

use crate::{palette, state::MeterSettings};

const EMPTY_PROMPT: &str = "Enter your height and weight";
const INVALID_PROMPT: &str = "Enter valid numbers";

/// What the result panel should show for the current input.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub(crate) enum Readout {
    /// Nothing entered yet.
    Empty,
    /// Input present but rejected by the engine.
    Invalid,
    Valid(BmiResult),
}

impl Readout {
    /// Evaluates the current field text.
    ///
    /// Errors from the engine are logged and folded into [`Readout::Invalid`].
    #[must_use]
    pub(crate) fn evaluate(
        weight_text: &str,
        height_text: &str,
        unit_system: UnitSystem,
    ) -> Self {
        if weight_text.trim().is_empty() && height_text.trim().is_empty() {
            return Self::Empty;
        }
        match Measurement::parse(weight_text, height_text, unit_system) {
            Ok(measurement) => Self::Valid(measurement.bmi()),
            Err(err) => {
                log::debug!("measurement rejected: {err}");
                Self::Invalid
            }
        }
    }

    #[must_use]
    pub(crate) fn result(&self) -> Option<&BmiResult> {
        match self {
            Self::Valid(result) => Some(result),
            Self::Empty | Self::Invalid => None,
        }
    }

    #[must_use]
    pub(crate) fn value_text(&self) -> String {
        self.result()
            .map_or_else(|| PLACEHOLDER.to_owned(), BmiResult::display_value)
    }

    /// Category label, or a prompt when there is no result.
    #[must_use]
    pub(crate) fn message(&self) -> String {
        match self {
            Self::Empty => EMPTY_PROMPT.to_owned(),
            Self::Invalid => INVALID_PROMPT.to_owned(),
            Self::Valid(result) => result.category.to_string(),
        }
    }

    #[must_use]
    pub(crate) fn target_color(&self) -> Rgb {
        self.result()
            .map_or(palette::ACCENT, |result| palette::category_color(result.category))
    }

    #[must_use]
    pub(crate) fn meter_percent(&self, meter: &MeterSettings) -> f64 {
        self.result().map_or(0.0, |result| meter.percent(result.value))
    }
}

#[cfg(test)]
mod tests {
    use bmi_core::Category;

    use super::*;

    #[test]
    fn blank_fields_prompt_for_input() {
        let readout = Readout::evaluate("", "  ", UnitSystem::Metric);
        assert_eq!(readout, Readout::Empty);
        assert_eq!(readout.value_text(), "--.-");
        assert_eq!(readout.message(), "Enter your height and weight");
        assert_eq!(readout.target_color(), palette::ACCENT);
        assert_eq!(readout.meter_percent(&MeterSettings::default()), 0.0);
    }

    #[test]
    fn partial_or_bad_input_is_invalid() {
        for (weight, height) in [
            ("70", ""),
            ("", "1.75"),
            ("abc", "1.75"),
            ("0", "1.7"),
            ("-5", "1.7"),
            ("70", "1e-200"),
            ("1e308", "0.01"),
        ] {
            let readout = Readout::evaluate(weight, height, UnitSystem::Metric);
            assert!(readout.is_invalid(), "({weight:?}, {height:?})");
            assert_eq!(readout.value_text(), "--.-");
            assert_eq!(readout.message(), "Enter valid numbers");
            assert_eq!(readout.target_color(), palette::ACCENT);
            assert_eq!(readout.meter_percent(&MeterSettings::default()), 0.0);
        }
    }

    #[test]
    fn valid_metric_input() {
        let readout = Readout::evaluate("70", "1.75", UnitSystem::Metric);
        let result = readout.result().unwrap();
        assert_eq!(result.category, Category::Normal);
        assert_eq!(readout.value_text(), "22.9");
        assert_eq!(readout.message(), "Normal weight");
        assert_eq!(readout.target_color(), palette::NORMAL);

        let percent = readout.meter_percent(&MeterSettings::default());
        assert!((percent - 22.857 / 40.0 * 100.0).abs() < 0.01);
    }

    #[test]
    fn unit_system_changes_the_result() {
        let metric = Readout::evaluate("154", "69", UnitSystem::Metric);
        let imperial = Readout::evaluate("154", "69", UnitSystem::Imperial);
        assert_eq!(metric.message(), "Underweight");
        assert_eq!(imperial.value_text(), "22.7");
        assert_eq!(imperial.message(), "Normal weight");
    }

    #[test]
    fn obese_fills_meter() {
        let readout = Readout::evaluate("150", "1.6", UnitSystem::Metric);
        assert_eq!(readout.target_color(), palette::OBESE);
        assert_eq!(readout.meter_percent(&MeterSettings::default()), 100.0);
    }
}
