//! Errors produced while building a [`Measurement`](crate::Measurement).

/// The input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Field {
    /// The weight field.
    #[display("weight")]
    Weight,
    /// The height field.
    #[display("height")]
    Height,
}

/// A weight or height that cannot produce a BMI.
///
/// Raised when a value is missing, non-numeric, non-finite, zero, or negative,
/// or when the BMI of otherwise valid values cannot be represented. Every
/// variant names the offending [`Field`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidMeasurement {
    /// The field was empty.
    #[display("{field} is missing")]
    Missing {
        /// The empty field.
        field: Field,
    },
    /// The field text is not a decimal number.
    #[display("{field} is not a number: {text:?}")]
    NotANumber {
        /// The field that failed to parse.
        field: Field,
        /// The trimmed input text.
        text: String,
    },
    /// The value is NaN or infinite.
    #[display("{field} must be finite, got {value}")]
    NonFinite {
        /// The offending field.
        field: Field,
        /// The rejected value.
        value: f64,
    },
    /// The value is zero or negative.
    #[display("{field} must be positive, got {value}")]
    NonPositive {
        /// The offending field.
        field: Field,
        /// The rejected value.
        value: f64,
    },
    /// The value is too small or too large for the BMI to be a finite,
    /// positive number.
    #[display("{field} is out of range, got {value}")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The rejected value.
        value: f64,
    },
}

impl InvalidMeasurement {
    /// Returns the field the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field, .. }
            | Self::NonPositive { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }

    /// Checks that `value` is a finite, strictly positive number.
    pub(crate) fn check(field: Field, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NonFinite { field, value });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { field, value });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_positive_finite_values() {
        assert_eq!(InvalidMeasurement::check(Field::Weight, 70.0), Ok(70.0));
        assert_eq!(
            InvalidMeasurement::check(Field::Height, f64::MIN_POSITIVE),
            Ok(f64::MIN_POSITIVE)
        );
    }

    #[test]
    fn check_rejects_zero_negative_and_non_finite() {
        assert!(matches!(
            InvalidMeasurement::check(Field::Weight, 0.0),
            Err(InvalidMeasurement::NonPositive { field: Field::Weight, .. })
        ));
        assert!(matches!(
            InvalidMeasurement::check(Field::Height, -1.0),
            Err(InvalidMeasurement::NonPositive { field: Field::Height, .. })
        ));
        assert!(matches!(
            InvalidMeasurement::check(Field::Height, f64::NAN),
            Err(InvalidMeasurement::NonFinite { .. })
        ));
        assert!(matches!(
            InvalidMeasurement::check(Field::Weight, f64::INFINITY),
            Err(InvalidMeasurement::NonFinite { .. })
        ));
    }

    #[test]
    fn display_names_the_field() {
        let err = InvalidMeasurement::NotANumber {
            field: Field::Height,
            text: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), r#"height is not a number: "abc""#);
        assert_eq!(err.field(), Field::Height);

        let err = InvalidMeasurement::Missing {
            field: Field::Weight,
        };
        assert_eq!(err.to_string(), "weight is missing");

        let err = InvalidMeasurement::OutOfRange {
            field: Field::Weight,
            value: 1.5e300,
        };
        assert!(err.to_string().starts_with("weight is out of range, got 15"));
        assert_eq!(err.field(), Field::Weight);
    }
}
