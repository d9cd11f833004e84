//! BMI computation and display formatting.

use crate::{Category, Field, InvalidMeasurement, UnitSystem, classify};

/// Display string used when there is no BMI to show.
pub const PLACEHOLDER: &str = "--.-";

/// Computes a BMI from a weight and a height.
///
/// Metric inputs are kilograms and meters; imperial inputs are pounds and
/// inches and are scaled by 703.
///
/// # Errors
///
/// Returns [`InvalidMeasurement`] if either value is zero, negative, NaN, or
/// infinite. Weight is checked before height. Values that are valid on their
/// own but whose BMI overflows or underflows are reported as
/// [`InvalidMeasurement::OutOfRange`].
///
/// # Examples
///
/// ```
/// use bmi_core::{UnitSystem, compute_bmi};
///
/// let bmi = compute_bmi(70.0, 1.75, UnitSystem::Metric)?;
/// assert!((bmi - 22.857).abs() < 0.001);
///
/// assert!(compute_bmi(0.0, 1.7, UnitSystem::Metric).is_err());
/// assert!(compute_bmi(70.0, 1e-200, UnitSystem::Metric).is_err());
/// # Ok::<(), bmi_core::InvalidMeasurement>(())
/// ```
pub fn compute_bmi(
    weight: f64,
    height: f64,
    unit_system: UnitSystem,
) -> Result<f64, InvalidMeasurement> {
    let weight = InvalidMeasurement::check(Field::Weight, weight)?;
    let height = InvalidMeasurement::check(Field::Height, height)?;
    checked_bmi(weight, height, unit_system)
}

/// Computes the BMI of already checked values, rejecting results that are
/// zero, subnormal, or infinite.
///
/// A height whose square leaves the normal range is blamed on the height;
/// any other overflow or underflow is blamed on the weight.
pub(crate) fn checked_bmi(
    weight: f64,
    height: f64,
    unit_system: UnitSystem,
) -> Result<f64, InvalidMeasurement> {
    if !(height * height).is_normal() {
        return Err(InvalidMeasurement::OutOfRange {
            field: Field::Height,
            value: height,
        });
    }
    let bmi = bmi_unchecked(weight, height, unit_system);
    if !bmi.is_normal() {
        return Err(InvalidMeasurement::OutOfRange {
            field: Field::Weight,
            value: weight,
        });
    }
    Ok(bmi)
}

pub(crate) fn bmi_unchecked(weight: f64, height: f64, unit_system: UnitSystem) -> f64 {
    weight / (height * height) * unit_system.conversion_factor()
}

/// Formats a BMI value with one decimal place.
///
/// Uses the standard library's correctly rounded decimal formatting, which
/// resolves exact ties to even.
///
/// ```
/// use bmi_core::format_bmi;
///
/// assert_eq!(format_bmi(22.857), "22.9");
/// assert_eq!(format_bmi(22.0), "22.0");
/// assert_eq!(format_bmi(0.25), "0.2");
/// ```
#[must_use]
pub fn format_bmi(value: f64) -> String {
    format!("{value:.1}")
}

/// A computed BMI and its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// The raw BMI value.
    pub value: f64,
    /// The category the value falls into.
    pub category: Category,
}

impl BmiResult {
    /// Classifies an already computed BMI value.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            category: classify(value),
        }
    }

    /// Returns the value formatted with [`format_bmi`].
    #[must_use]
    pub fn display_value(&self) -> String {
        format_bmi(self.value)
    }
}
