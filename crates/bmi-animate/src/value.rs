//! Eased transitions between numeric values.

use std::iter::FusedIterator;

use crate::ease_in_out;

/// Value of frame `step` (1-based) of a `steps`-frame transition.
///
/// The last frame is exactly `target`, independent of floating-point error
/// in the easing curve.
fn frame_value(start: f64, target: f64, step: u32, steps: u32) -> f64 {
    if step >= steps {
        return target;
    }
    let progress = f64::from(step) / f64::from(steps);
    let value = start + (target - start) * ease_in_out(progress);
    value.clamp(start.min(target), start.max(target))
}

/// Returns the `steps` intermediate values of an eased transition from
/// `start` to `target`.
///
/// The sequence is computed lazily. It excludes `start` and its last element
/// is exactly `target`. With `steps == 0` it is empty.
///
/// # Examples
///
/// ```
/// use bmi_animate::animate_value;
///
/// let frames: Vec<f64> = animate_value(10.0, 0.0, 4).collect();
/// assert_eq!(frames.len(), 4);
/// assert!(frames.windows(2).all(|w| w[0] >= w[1]));
/// assert_eq!(frames[3], 0.0);
/// ```
#[must_use]
pub fn animate_value(start: f64, target: f64, steps: u32) -> ValueFrames {
    ValueFrames {
        start,
        target,
        emitted: 0,
        steps,
    }
}

/// Iterator returned by [`animate_value`].
#[derive(Debug, Clone)]
pub struct ValueFrames {
    start: f64,
    target: f64,
    emitted: u32,
    steps: u32,
}

impl ValueFrames {
    fn remaining(&self) -> u32 {
        self.steps.saturating_sub(self.emitted)
    }
}

impl Iterator for ValueFrames {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.steps {
            return None;
        }
        self.emitted += 1;
        Some(frame_value(self.start, self.target, self.emitted, self.steps))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for ValueFrames {}
impl ExactSizeIterator for ValueFrames {}

/// A retargetable eased transition advanced one step at a time.
///
/// A new transition starts idle at its initial value. [`retarget`] begins a
/// transition from the current value, even mid-flight; each [`advance`]
/// moves one frame along it until the target is reached exactly.
///
/// [`retarget`]: ValueTransition::retarget
/// [`advance`]: ValueTransition::advance
///
/// # Examples
///
/// ```
/// use bmi_animate::ValueTransition;
///
/// let mut meter = ValueTransition::new(0.0, 20);
/// assert!(meter.retarget(55.0));
/// while meter.advance() {}
/// assert_eq!(meter.current(), 55.0);
/// assert!(meter.is_idle());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTransition {
    current: f64,
    start: f64,
    target: f64,
    step: u32,
    total_steps: u32,
}

impl ValueTransition {
    /// Creates an idle transition resting at `value`.
    #[must_use]
    pub fn new(value: f64, total_steps: u32) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            step: total_steps,
            total_steps,
        }
    }

    /// The value of the most recent frame.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The value the transition converges to.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Number of frames in a full transition.
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Returns `true` once the current value equals the target.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Starts a transition from the current value towards `target`.
    ///
    /// Returns `false` and leaves the transition untouched when `target` is
    /// already the target, so repeated requests neither restart an animation
    /// in flight nor wake an idle one.
    pub fn retarget(&mut self, target: f64) -> bool {
        if target.to_bits() == self.target.to_bits() {
            return false;
        }
        self.start = self.current;
        self.target = target;
        self.step = 0;
        if self.total_steps == 0 {
            self.current = target;
        }
        true
    }

    /// Moves one frame forward.
    ///
    /// Returns `true` while frames remain after this one.
    pub fn advance(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        self.step += 1;
        self.current = frame_value(self.start, self.target, self.step, self.total_steps);
        !self.is_idle()
    }

    /// Jumps straight to the target and goes idle.
    pub fn snap(&mut self) {
        self.current = self.target;
        self.step = self.total_steps;
    }

    /// Returns the frames still ahead of the current one.
    #[must_use]
    pub fn remaining_frames(&self) -> ValueFrames {
        let mut frames = animate_value(self.start, self.target, self.total_steps);
        frames.emitted = self.step;
        frames
    }
}
