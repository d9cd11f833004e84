use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) animation: AnimationSettings,
    pub(crate) meter: MeterSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnimationSettings {
    pub(crate) enabled: bool,
    pub(crate) meter_steps: u32,
    pub(crate) meter_tick: Duration,
    pub(crate) color_fraction: f32,
    pub(crate) color_tick: Duration,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            meter_steps: 20,
            meter_tick: Duration::from_millis(10),
            color_fraction: 0.1,
            color_tick: Duration::from_millis(20),
        }
    }
}

/// BMI range covered by the meter, from empty to full.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeterSettings {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Default for MeterSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 40.0,
        }
    }
}

impl MeterSettings {
    /// Maps a BMI onto the meter as a percentage in `[0, 100]`.
    #[must_use]
    pub(crate) fn percent(&self, bmi: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (bmi.clamp(self.min, self.max) - self.min) / span * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::MeterSettings;

    #[test]
    fn percent_clamps_to_meter_range() {
        let meter = MeterSettings::default();
        assert_eq!(meter.percent(20.0), 50.0);
        assert_eq!(meter.percent(-3.0), 0.0);
        assert_eq!(meter.percent(55.0), 100.0);
        assert_eq!(meter.percent(40.0), 100.0);
    }

    #[test]
    fn degenerate_range_is_empty() {
        let meter = MeterSettings {
            min: 10.0,
            max: 10.0,
        };
        assert_eq!(meter.percent(12.0), 0.0);
    }
}
