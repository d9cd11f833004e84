//! Result colors, independent of the egui theme.

use bmi_animate::Rgb;
use bmi_core::Category;

/// Neutral color shown while there is no valid result; also the start color.
pub(crate) const ACCENT: Rgb = Rgb::new(66, 133, 244);

pub(crate) const UNDERWEIGHT: Rgb = Rgb::new(255, 152, 0);
pub(crate) const NORMAL: Rgb = Rgb::new(76, 175, 80);
pub(crate) const OVERWEIGHT: Rgb = Rgb::new(255, 152, 0);
pub(crate) const OBESE: Rgb = Rgb::new(244, 67, 54);

#[must_use]
pub(crate) const fn category_color(category: Category) -> Rgb {
    match category {
        Category::Underweight => UNDERWEIGHT,
        Category::Normal => NORMAL,
        Category::Overweight => OVERWEIGHT,
        Category::Obese => OBESE,
    }
}
