//! Validated measurements and the raw-text adapter.

use crate::{BmiResult, Field, InvalidMeasurement, UnitSystem, bmi::{bmi_unchecked, checked_bmi}};

/// A weight and a height that are both finite and strictly positive, and
/// whose BMI is a finite, positive number.
///
/// Construction is the only place validation happens, so every `Measurement`
/// can produce a [`BmiResult`] without failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight: f64,
    height: f64,
    unit_system: UnitSystem,
}

impl Measurement {
    /// Creates a measurement from numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurement`] if either value is zero, negative, NaN,
    /// or infinite, or if their BMI is out of range.
    pub fn new(
        weight: f64,
        height: f64,
        unit_system: UnitSystem,
    ) -> Result<Self, InvalidMeasurement> {
        let weight = InvalidMeasurement::check(Field::Weight, weight)?;
        let height = InvalidMeasurement::check(Field::Height, height)?;
        checked_bmi(weight, height, unit_system)?;
        Ok(Self {
            weight,
            height,
            unit_system,
        })
    }

    /// Creates a measurement from raw field text.
    ///
    /// Surrounding whitespace is ignored. Fields are parsed as decimal
    /// numbers (exponent notation is accepted) and then validated like
    /// [`Measurement::new`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurement::Missing`] for a blank field,
    /// [`InvalidMeasurement::NotANumber`] for unparsable text, and the
    /// validation errors of [`Measurement::new`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_core::{Field, InvalidMeasurement, Measurement, UnitSystem};
    ///
    /// let m = Measurement::parse(" 154 ", "69", UnitSystem::Imperial)?;
    /// assert_eq!(m.weight(), 154.0);
    ///
    /// let err = Measurement::parse("70", "tall", UnitSystem::Metric).unwrap_err();
    /// assert_eq!(err.field(), Field::Height);
    /// # Ok::<(), InvalidMeasurement>(())
    /// ```
    pub fn parse(
        weight_text: &str,
        height_text: &str,
        unit_system: UnitSystem,
    ) -> Result<Self, InvalidMeasurement> {
        let weight = parse_field(Field::Weight, weight_text)?;
        let height = parse_field(Field::Height, height_text)?;
        Self::new(weight, height, unit_system)
    }

    /// The weight, in kilograms or pounds.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The height, in meters or inches.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The unit system of both values.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Computes and classifies the BMI of this measurement.
    #[must_use]
    pub fn bmi(&self) -> BmiResult {
        BmiResult::from_value(bmi_unchecked(self.weight, self.height, self.unit_system))
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, InvalidMeasurement> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InvalidMeasurement::Missing { field });
    }
    text.parse().map_err(|_| InvalidMeasurement::NotANumber {
        field,
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use crate::Category;

    use super::*;

    #[test]
    fn parse_trims_and_computes() {
        let measurement = Measurement::parse(" 70 ", "\t1.75\n", UnitSystem::Metric).unwrap();
        assert_eq!(measurement.weight(), 70.0);
        assert_eq!(measurement.height(), 1.75);
        assert_eq!(measurement.unit_system(), UnitSystem::Metric);

        let result = measurement.bmi();
        assert_eq!(result.category, Category::Normal);
        assert_eq!(result.display_value(), "22.9");
    }

    #[test]
    fn parse_reports_missing_fields() {
        assert_eq!(
            Measurement::parse("", "1.75", UnitSystem::Metric),
            Err(InvalidMeasurement::Missing {
                field: Field::Weight
            })
        );
        assert_eq!(
            Measurement::parse("70", "   ", UnitSystem::Metric),
            Err(InvalidMeasurement::Missing {
                field: Field::Height
            })
        );
    }

    #[test]
    fn parse_rejects_non_numeric_and_non_finite_text() {
        assert!(matches!(
            Measurement::parse("seventy", "1.75", UnitSystem::Metric),
            Err(InvalidMeasurement::NotANumber { field: Field::Weight, .. })
        ));
        assert!(matches!(
            Measurement::parse("70", "1,75", UnitSystem::Metric),
            Err(InvalidMeasurement::NotANumber { field: Field::Height, .. })
        ));
        assert!(matches!(
            Measurement::parse("NaN", "1.75", UnitSystem::Metric),
            Err(InvalidMeasurement::NonFinite { field: Field::Weight, .. })
        ));
        assert!(matches!(
            Measurement::parse("70", "inf", UnitSystem::Metric),
            Err(InvalidMeasurement::NonFinite { field: Field::Height, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_positive_values() {
        assert!(matches!(
            Measurement::parse("0", "1.7", UnitSystem::Metric),
            Err(InvalidMeasurement::NonPositive { field: Field::Weight, .. })
        ));
        assert!(matches!(
            Measurement::parse("70", "-1.7", UnitSystem::Metric),
            Err(InvalidMeasurement::NonPositive { field: Field::Height, .. })
        ));
    }

    #[test]
    fn parse_rejects_values_with_infinite_bmi() {
        assert_eq!(
            Measurement::parse("70", "1e-200", UnitSystem::Metric),
            Err(InvalidMeasurement::OutOfRange {
                field: Field::Height,
                value: 1e-200
            })
        );
        assert!(matches!(
            Measurement::new(1e308, 0.5, UnitSystem::Imperial),
            Err(InvalidMeasurement::OutOfRange { field: Field::Weight, .. })
        ));
    }

    #[test]
    fn same_input_gives_identical_result() {
        let first = Measurement::parse("154", "69", UnitSystem::Imperial)
            .unwrap()
            .bmi();
        let second = Measurement::parse("154", "69", UnitSystem::Imperial)
            .unwrap()
            .bmi();
        assert_eq!(first.value.to_bits(), second.value.to_bits());
        assert_eq!(first.category, second.category);
    }
}
