//! Unit systems for weight and height.

/// The unit system a [`Measurement`](crate::Measurement) is expressed in.
///
/// # Examples
///
/// ```
/// use bmi_core::UnitSystem;
///
/// assert_eq!(UnitSystem::default(), UnitSystem::Metric);
/// assert_eq!(UnitSystem::Imperial.weight_unit(), "lbs");
/// assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum UnitSystem {
    /// Kilograms and meters.
    #[default]
    #[display("Metric (kg, m)")]
    Metric,
    /// Pounds and inches.
    #[display("Imperial (lbs, inches)")]
    Imperial,
}

impl UnitSystem {
    /// All unit systems in selector order.
    pub const ALL: [Self; 2] = [Self::Metric, Self::Imperial];

    /// Multiplier applied to `weight / height²` to obtain a BMI.
    #[must_use]
    pub const fn conversion_factor(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => 703.0,
        }
    }

    /// Short label of the weight unit.
    #[must_use]
    pub const fn weight_unit(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lbs",
        }
    }

    /// Short label of the height unit.
    #[must_use]
    pub const fn height_unit(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Imperial => "in",
        }
    }

    /// Returns the other unit system.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_selector_text() {
        assert_eq!(UnitSystem::Metric.to_string(), "Metric (kg, m)");
        assert_eq!(UnitSystem::Imperial.to_string(), "Imperial (lbs, inches)");
    }

    #[test]
    fn toggled_is_an_involution() {
        for unit in UnitSystem::ALL {
            assert_ne!(unit.toggled(), unit);
            assert_eq!(unit.toggled().toggled(), unit);
        }
    }
}
