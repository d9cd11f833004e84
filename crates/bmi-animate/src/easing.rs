//! Easing curves.

use std::f64::consts::PI;

/// Sinusoidal ease-in-out: slow at both ends, fastest at `p = 0.5`.
///
/// `p` is clamped to `[0, 1]`. The curve maps 0 to 0 and 1 to 1 and is
/// symmetric around the midpoint.
///
/// ```
/// use bmi_animate::ease_in_out;
///
/// assert_eq!(ease_in_out(0.0), 0.0);
/// assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
/// assert_eq!(ease_in_out(1.0), 1.0);
/// ```
#[must_use]
pub fn ease_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    (((p - 0.5) * PI).sin() + 1.0) / 2.0
}
