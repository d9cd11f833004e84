//! Light theme matching the calculator's card layout.

use bmi_animate::Rgb;
use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, Theme, vec2};

pub(crate) const BACKGROUND: Color32 = Color32::from_rgb(248, 249, 250);
pub(crate) const PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub(crate) const TEXT: Color32 = Color32::from_rgb(33, 33, 33);
pub(crate) const LABEL: Color32 = Color32::from_rgb(95, 99, 104);
pub(crate) const FIELD: Color32 = Color32::from_rgb(245, 245, 245);
pub(crate) const METER_TRACK: Color32 = Color32::from_rgb(235, 235, 235);

pub(crate) const PANEL_CORNER_RADIUS: u8 = 10;
pub(crate) const PANEL_MARGIN: i8 = 25;

#[must_use]
pub(crate) const fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// The rounded white card the calculator sits on.
#[must_use]
pub(crate) fn panel_frame() -> Frame {
    Frame::new()
        .fill(PANEL)
        .corner_radius(CornerRadius::same(PANEL_CORNER_RADIUS))
        .inner_margin(Margin::same(PANEL_MARGIN))
}

pub(crate) fn apply(ctx: &Context) {
    ctx.set_theme(Theme::Light);
    ctx.style_mut_of(Theme::Light, |style| {
        style.visuals.panel_fill = BACKGROUND;
        style.visuals.extreme_bg_color = FIELD;
        style.spacing.item_spacing = vec2(8.0, 6.0);
    });
}
