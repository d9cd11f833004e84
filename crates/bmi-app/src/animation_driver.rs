//! Drives the readout animations from the egui frame clock.

use std::time::Duration;

use bmi_animate::{AnimationState, RenderFrame, Rgb};

use crate::state::AnimationSettings;

/// Longest frame time fed to the clocks; longer stalls are treated as this.
const MAX_FRAME_TIME: f32 = 0.25;

/// Converts a frame's `stable_dt` into a duration the clocks can consume.
#[must_use]
pub(crate) fn frame_elapsed(dt_secs: f32) -> Duration {
    if !dt_secs.is_finite() {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(dt_secs.clamp(0.0, MAX_FRAME_TIME)).unwrap_or_default()
}

/// Turns elapsed time into whole ticks of a fixed interval.
///
/// The remainder carries over to the next call.
#[derive(Debug, Clone)]
pub(crate) struct TickClock {
    interval: Duration,
    pending: Duration,
}

impl TickClock {
    pub(crate) const MAX_CATCH_UP: u32 = 64;

    #[must_use]
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    #[must_use]
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns how many ticks fit in the time accumulated so far.
    ///
    /// A zero interval ticks once per call. After a stall, at most
    /// [`Self::MAX_CATCH_UP`] ticks are returned and the backlog is dropped.
    pub(crate) fn ticks(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 1;
        }
        self.pending += elapsed;
        let ticks = self.pending.as_nanos() / self.interval.as_nanos();
        match u32::try_from(ticks) {
            Ok(ticks) if ticks < Self::MAX_CATCH_UP => {
                self.pending -= self.interval * ticks;
                ticks
            }
            _ => {
                self.pending = Duration::ZERO;
                Self::MAX_CATCH_UP
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}

/// Owns the readout's [`AnimationState`] and advances it on the frame loop.
///
/// The meter and the color each have their own clock. A clock only
/// accumulates time while its transition is running, so a fresh transition
/// always starts from a clean tick boundary.
#[derive(Debug, Clone)]
pub(crate) struct AnimationDriver {
    state: AnimationState,
    meter_clock: TickClock,
    color_clock: TickClock,
    enabled: bool,
}

impl AnimationDriver {
    #[must_use]
    pub(crate) fn new(settings: &AnimationSettings, color: Rgb) -> Self {
        Self {
            state: AnimationState::new(0.0, color, settings.meter_steps, settings.color_fraction),
            meter_clock: TickClock::new(settings.meter_tick),
            color_clock: TickClock::new(settings.color_tick),
            enabled: settings.enabled,
        }
    }

    /// Applies new settings, keeping what is on screen and the pending targets.
    pub(crate) fn reconfigure(&mut self, settings: &AnimationSettings) {
        let frame = self.state.frame();
        let meter_target = self.state.meter().target();
        let color_target = self.state.color().target();

        *self = Self {
            state: AnimationState::new(
                frame.meter,
                frame.color,
                settings.meter_steps,
                settings.color_fraction,
            ),
            meter_clock: TickClock::new(settings.meter_tick),
            color_clock: TickClock::new(settings.color_tick),
            enabled: settings.enabled,
        };
        self.retarget(meter_target, color_target);
    }

    /// Points the animations at a new readout.
    ///
    /// Returns `true` if a target changed. Unchanged targets leave running
    /// or converged transitions untouched.
    pub(crate) fn retarget(&mut self, meter: f64, color: Rgb) -> bool {
        let changed = self.state.retarget(meter, color);
        if changed {
            log::debug!("animation retargeted: meter={meter:.1}% color={color}");
        }
        if !self.enabled {
            self.state.snap();
        }
        changed
    }

    /// Empties the meter at once and fades the color to `color`.
    ///
    /// Used when there is no result to show.
    pub(crate) fn clear(&mut self, color: Rgb) -> bool {
        let changed = self.retarget(0.0, color);
        self.state.snap_meter();
        changed
    }

    /// Advances both transitions by the ticks that fit in `elapsed`.
    ///
    /// Returns `true` while either transition is still running.
    pub(crate) fn update(&mut self, elapsed: Duration) -> bool {
        if self.state.meter().is_idle() {
            self.meter_clock.reset();
        } else {
            let ticks = self.meter_clock.ticks(elapsed);
            log::trace!("meter: {ticks} tick(s)");
            for _ in 0..ticks {
                if !self.state.advance_meter() {
                    break;
                }
            }
        }

        if self.state.color().is_idle() {
            self.color_clock.reset();
        } else {
            let ticks = self.color_clock.ticks(elapsed);
            log::trace!("color: {ticks} tick(s)");
            for _ in 0..ticks {
                if !self.state.advance_color() {
                    break;
                }
            }
        }

        !self.state.is_idle()
    }

    /// Delay until the next tick is due, or `None` when idle.
    #[must_use]
    pub(crate) fn next_wakeup(&self) -> Option<Duration> {
        let meter = (!self.state.meter().is_idle()).then(|| self.meter_clock.interval());
        let color = (!self.state.color().is_idle()).then(|| self.color_clock.interval());
        match (meter, color) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub(crate) fn frame(&self) -> RenderFrame {
        self.state.frame()
    }

    #[must_use]
    pub(crate) fn meter_is_idle(&self) -> bool {
        self.state.meter().is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgb = Rgb::new(66, 133, 244);
    const GREEN: Rgb = Rgb::new(76, 175, 80);

    fn run_to_idle(driver: &mut AnimationDriver, frame: Duration) -> usize {
        let mut frames = 0;
        while driver.update(frame) {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn clock_carries_remainder() {
        let mut clock = TickClock::new(Duration::from_millis(10));
        assert_eq!(clock.ticks(Duration::from_millis(16)), 1);
        assert_eq!(clock.ticks(Duration::from_millis(16)), 2);
        assert_eq!(clock.ticks(Duration::from_millis(8)), 1);
        assert_eq!(clock.ticks(Duration::from_millis(9)), 0);
    }

    #[test]
    fn clock_caps_catch_up_and_drops_backlog() {
        let mut clock = TickClock::new(Duration::from_millis(10));
        assert_eq!(clock.ticks(Duration::from_secs(5)), TickClock::MAX_CATCH_UP);
        assert_eq!(clock.ticks(Duration::from_millis(5)), 0);
    }

    #[test]
    fn zero_interval_ticks_every_frame() {
        let mut clock = TickClock::new(Duration::ZERO);
        assert_eq!(clock.ticks(Duration::ZERO), 1);
        assert_eq!(clock.ticks(Duration::from_millis(100)), 1);
    }

    #[test]
    fn frame_elapsed_sanitizes_input() {
        assert_eq!(frame_elapsed(f32::NAN), Duration::ZERO);
        assert_eq!(frame_elapsed(-1.0), Duration::ZERO);
        assert_eq!(frame_elapsed(10.0), Duration::from_millis(250));
    }

    #[test]
    fn converges_to_targets() {
        let mut driver = AnimationDriver::new(&AnimationSettings::default(), ACCENT);
        assert_eq!(driver.next_wakeup(), None);

        assert!(driver.retarget(57.0, GREEN));
        assert_eq!(driver.next_wakeup(), Some(Duration::from_millis(10)));

        // 20 meter ticks of 10ms need 200ms; one tick per 10ms frame.
        let frames = run_to_idle(&mut driver, Duration::from_millis(10));
        assert!(frames >= 19);
        assert_eq!(driver.frame().meter, 57.0);
        assert_eq!(driver.frame().color, GREEN);
        assert!(driver.meter_is_idle());
        assert_eq!(driver.next_wakeup(), None);
    }

    #[test]
    fn meter_finishes_before_color() {
        let mut driver = AnimationDriver::new(&AnimationSettings::default(), ACCENT);
        driver.retarget(57.0, GREEN);
        for _ in 0..20 {
            driver.update(Duration::from_millis(10));
        }
        assert!(driver.meter_is_idle());
        assert_eq!(driver.next_wakeup(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn repeated_retarget_does_not_restart() {
        let mut driver = AnimationDriver::new(&AnimationSettings::default(), ACCENT);
        driver.retarget(57.0, GREEN);
        driver.update(Duration::from_millis(50));
        let partway = driver.frame();

        assert!(!driver.retarget(57.0, GREEN));
        assert_eq!(driver.frame(), partway);

        run_to_idle(&mut driver, Duration::from_millis(16));
        assert!(!driver.retarget(57.0, GREEN));
        assert_eq!(driver.next_wakeup(), None);
    }

    #[test]
    fn clear_empties_meter_immediately() {
        let mut driver = AnimationDriver::new(&AnimationSettings::default(), ACCENT);
        driver.retarget(57.0, GREEN);
        run_to_idle(&mut driver, Duration::from_millis(16));

        assert!(driver.clear(ACCENT));
        assert_eq!(driver.frame().meter, 0.0);
        assert!(driver.meter_is_idle());
        assert_eq!(driver.frame().color, GREEN);
        assert_eq!(driver.next_wakeup(), Some(Duration::from_millis(20)));

        run_to_idle(&mut driver, Duration::from_millis(16));
        assert_eq!(driver.frame().color, ACCENT);
        assert!(!driver.clear(ACCENT));
    }

    #[test]
    fn disabled_animation_snaps() {
        let settings = AnimationSettings {
            enabled: false,
            ..AnimationSettings::default()
        };
        let mut driver = AnimationDriver::new(&settings, ACCENT);
        assert!(driver.retarget(80.0, GREEN));
        assert_eq!(driver.frame().meter, 80.0);
        assert_eq!(driver.frame().color, GREEN);
        assert!(!driver.update(Duration::from_millis(10)));
    }

    #[test]
    fn reconfigure_keeps_frame_and_targets() {
        let mut driver = AnimationDriver::new(&AnimationSettings::default(), ACCENT);
        driver.retarget(57.0, GREEN);
        driver.update(Duration::from_millis(50));
        let partway = driver.frame();

        driver.reconfigure(&AnimationSettings::default());
        assert_eq!(driver.frame(), partway);
        run_to_idle(&mut driver, Duration::from_millis(16));
        assert_eq!(driver.frame().meter, 57.0);

        driver.retarget(10.0, ACCENT);
        driver.reconfigure(&AnimationSettings {
            enabled: false,
            ..AnimationSettings::default()
        });
        assert_eq!(driver.frame().meter, 10.0);
        assert_eq!(driver.frame().color, ACCENT);
    }
}
