//! BMI categories and their thresholds.

/// Lower bound of [`Category::Normal`].
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of [`Category::Overweight`].
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of [`Category::Obese`].
pub const OBESE_MIN: f64 = 30.0;

/// Weight category derived from a BMI value.
///
/// Categories are ordered from lowest to highest BMI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Category {
    /// BMI below 18.5.
    #[display("Underweight")]
    Underweight,
    /// BMI from 18.5 up to (not including) 25.
    #[display("Normal weight")]
    Normal,
    /// BMI from 25 up to (not including) 30.
    #[display("Overweight")]
    Overweight,
    /// BMI of 30 or more.
    #[display("Obese")]
    Obese,
}

impl Category {
    /// All categories in ascending BMI order.
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Human-readable threshold range, as shown in the category legend.
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5 - 24.9",
            Self::Overweight => "25 - 29.9",
            Self::Obese => "≥ 30",
        }
    }
}

/// Classifies a BMI value.
///
/// Thresholds are half-open: each lower bound belongs to the higher category.
///
/// # Examples
///
/// ```
/// use bmi_core::{Category, classify};
///
/// assert_eq!(classify(18.4999), Category::Underweight);
/// assert_eq!(classify(18.5), Category::Normal);
/// assert_eq!(classify(30.0), Category::Obese);
/// ```
#[must_use]
pub fn classify(bmi: f64) -> Category {
    if bmi < NORMAL_MIN {
        Category::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        Category::Normal
    } else if bmi < OBESE_MIN {
        Category::Overweight
    } else {
        Category::Obese
    }
}
