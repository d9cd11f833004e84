use bmi_animate::Rgb;
use eframe::egui::{Align2, CornerRadius, FontId, Rect, Sense, Ui, vec2};

use crate::ui::theme;

const WIDTH: f32 = 250.0;
const HEIGHT: f32 = 20.0;
const CORNER_RADIUS: u8 = 10;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeterViewModel {
    pub(crate) percent: f64,
    pub(crate) caption: String,
    pub(crate) color: Rgb,
}

impl MeterViewModel {
    #[must_use]
    pub(crate) fn new(percent: f64, caption: String, color: Rgb) -> Self {
        Self {
            percent,
            caption,
            color,
        }
    }
}

/// Portion of the track to fill, in `[0, 1]`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
fn fill_fraction(percent: f64) -> f32 {
    (percent / 100.0).clamp(0.0, 1.0) as f32
}

/// Paints a rounded progress track filled to `vm.percent`, with the caption centered.
pub(crate) fn show(ui: &mut Ui, vm: &MeterViewModel) {
    let size = vec2(WIDTH.min(ui.available_width()), HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let radius = CornerRadius::same(CORNER_RADIUS);
    painter.rect_filled(rect, radius, theme::METER_TRACK);

    let fill_width = rect.width() * fill_fraction(vm.percent);
    if fill_width > 0.0 {
        let fill = Rect::from_min_size(rect.min, vec2(fill_width, rect.height()));
        painter.rect_filled(fill, radius, theme::color32(vm.color));
    }

    if !vm.caption.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &vm.caption,
            FontId::proportional(12.0),
            theme::TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fill_fraction;

    #[test]
    fn fill_fraction_is_clamped() {
        assert_eq!(fill_fraction(0.0), 0.0);
        assert_eq!(fill_fraction(50.0), 0.5);
        assert_eq!(fill_fraction(150.0), 1.0);
        assert_eq!(fill_fraction(-10.0), 0.0);
    }
}
