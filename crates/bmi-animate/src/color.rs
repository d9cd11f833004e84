//! RGB colors and stepwise color transitions.

/// An opaque 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{r:02x}{g:02x}{b:02x}")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

fn step_channel(current: u8, target: u8, fraction: f32) -> u8 {
    if current == target {
        return current;
    }
    let delta = f32::from(target) - f32::from(current);
    // Float-to-int `as` truncates toward zero and saturates at the u8 bounds.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let next = (f32::from(current) + delta * fraction) as u8;
    if next != current {
        next
    } else if target > current {
        current + 1
    } else {
        current - 1
    }
}

/// Moves each channel of `start` a `fraction` of the way towards `target`.
///
/// Channels are truncated to integers independently. When truncation would
/// leave a channel that still differs from the target unchanged, it moves by
/// one unit instead, so repeated application always reaches `target` exactly
/// and never overshoots. `fraction` is clamped to at most 1; a fraction of
/// zero or less (or NaN) returns `start` unchanged.
///
/// # Examples
///
/// ```
/// use bmi_animate::{Rgb, interpolate_color};
///
/// let start = Rgb::new(66, 133, 244);
/// let target = Rgb::new(76, 175, 80);
/// assert_eq!(interpolate_color(start, target, 0.1), Rgb::new(67, 137, 227));
/// assert_eq!(interpolate_color(start, target, 1.0), target);
/// ```
#[must_use]
pub fn interpolate_color(start: Rgb, target: Rgb, fraction: f32) -> Rgb {
    if fraction.is_nan() || fraction <= 0.0 {
        return start;
    }
    let fraction = fraction.min(1.0);
    Rgb {
        r: step_channel(start.r, target.r, fraction),
        g: step_channel(start.g, target.g, fraction),
        b: step_channel(start.b, target.b, fraction),
    }
}

/// A retargetable color transition that moves a fixed fraction per step.
///
/// # Examples
///
/// ```
/// use bmi_animate::{ColorTransition, Rgb};
///
/// let mut color = ColorTransition::new(Rgb::new(66, 133, 244), 0.1);
/// color.retarget(Rgb::new(244, 67, 54));
/// while color.advance() {}
/// assert_eq!(color.current(), Rgb::new(244, 67, 54));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTransition {
    current: Rgb,
    target: Rgb,
    fraction: f32,
}

impl ColorTransition {
    /// Creates an idle transition resting at `color`.
    #[must_use]
    pub fn new(color: Rgb, fraction: f32) -> Self {
        Self {
            current: color,
            target: color,
            fraction,
        }
    }

    /// The color of the most recent step.
    #[must_use]
    pub fn current(&self) -> Rgb {
        self.current
    }

    /// The color the transition converges to.
    #[must_use]
    pub fn target(&self) -> Rgb {
        self.target
    }

    /// Returns `true` once the current color equals the target.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current == self.target
    }

    /// Sets a new target, continuing from the current color.
    ///
    /// Returns `false` if `target` is already the target.
    pub fn retarget(&mut self, target: Rgb) -> bool {
        if target == self.target {
            return false;
        }
        self.target = target;
        true
    }

    /// Moves one step towards the target.
    ///
    /// Returns `true` while the target has not been reached. A non-positive
    /// fraction never converges, so it snaps to the target instead.
    pub fn advance(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        if self.fraction.is_nan() || self.fraction <= 0.0 {
            self.snap();
            return false;
        }
        self.current = interpolate_color(self.current, self.target, self.fraction);
        !self.is_idle()
    }

    /// Jumps straight to the target.
    pub fn snap(&mut self) {
        self.current = self.target;
    }
}
