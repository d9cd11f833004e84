use bmi_core::Category;
use eframe::egui::{RichText, Ui};

use crate::ui::theme;

const DISCLAIMER: &str = "BMI is a screening tool and not a diagnostic of body fatness or health.";

fn legend_line(category: Category) -> String {
    format!("{category}: {}", category.range_label())
}

pub(crate) fn show(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("BMI Categories:").size(12.0).color(theme::LABEL));
        for category in Category::ALL {
            ui.label(
                RichText::new(legend_line(category))
                    .size(12.0)
                    .color(theme::LABEL),
            );
        }
        ui.add_space(8.0);
        ui.label(RichText::new(DISCLAIMER).size(11.0).color(theme::LABEL));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_lists_thresholds() {
        let lines: Vec<_> = Category::ALL.into_iter().map(legend_line).collect();
        assert_eq!(
            lines,
            [
                "Underweight: < 18.5",
                "Normal weight: 18.5 - 24.9",
                "Overweight: 25 - 29.9",
                "Obese: ≥ 30",
            ]
        );
    }
}
