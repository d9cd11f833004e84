//! The meter and color transitions of one readout.

use crate::{ColorTransition, Rgb, ValueTransition};

/// What a view draws for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Meter fill, in percent.
    pub meter: f64,
    /// Color of the value text and meter fill.
    pub color: Rgb,
}

/// Owns the meter and color transitions of the readout.
///
/// The two transitions are independent: each is advanced separately so that
/// callers can drive them at different rates.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    meter: ValueTransition,
    color: ColorTransition,
}

impl AnimationState {
    /// Creates an idle state showing `meter` and `color`.
    #[must_use]
    pub fn new(meter: f64, color: Rgb, meter_steps: u32, color_fraction: f32) -> Self {
        Self {
            meter: ValueTransition::new(meter, meter_steps),
            color: ColorTransition::new(color, color_fraction),
        }
    }

    /// Retargets both transitions.
    ///
    /// Returns `true` if either target changed.
    pub fn retarget(&mut self, meter: f64, color: Rgb) -> bool {
        let meter_changed = self.meter.retarget(meter);
        let color_changed = self.color.retarget(color);
        meter_changed || color_changed
    }

    /// Advances the meter by one frame; returns `true` while frames remain.
    pub fn advance_meter(&mut self) -> bool {
        self.meter.advance()
    }

    /// Advances the color by one step; returns `true` while steps remain.
    pub fn advance_color(&mut self) -> bool {
        self.color.advance()
    }

    /// Jumps the meter to its target, leaving the color running.
    pub fn snap_meter(&mut self) {
        self.meter.snap();
    }

    /// Jumps both transitions to their targets.
    pub fn snap(&mut self) {
        self.meter.snap();
        self.color.snap();
    }

    /// The meter transition.
    #[must_use]
    pub fn meter(&self) -> &ValueTransition {
        &self.meter
    }

    /// The color transition.
    #[must_use]
    pub fn color(&self) -> &ColorTransition {
        &self.color
    }

    /// Returns `true` when neither transition has work left.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.meter.is_idle() && self.color.is_idle()
    }

    /// The values to draw right now.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            meter: self.meter.current(),
            color: self.color.current(),
        }
    }
}
