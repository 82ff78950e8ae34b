//! Per-minute day timeline storage.

use glam::DVec3;

use crate::solar::SunCycle;

/// Number of minutes in a simulated day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Number of per-minute samples, covering minute 0 through the closing
/// boundary at minute 1440 inclusive.
pub const SAMPLES_PER_DAY: usize = (MINUTES_PER_DAY as usize) + 1;

/// Formats a minute-of-day as a zero-padded `HH:MM` string.
///
/// Minute 1440 formats as `24:00` (the closing boundary row).
pub fn minute_to_hhmm(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// The assembled per-minute environment table for one simulated day.
///
/// Columns start unset and are populated by pipeline stages; a fully
/// populated timeline is immutable for the rest of the run. Every column
/// has exactly [`SAMPLES_PER_DAY`] entries, indexed by minute.
#[derive(Debug, Clone, Default)]
pub struct DayTimeline {
    /// Air temperature (°C) (populated by the temperature stage).
    pub temperature_c: Option<Vec<f64>>,
    /// Normalized snow coverage in [0, 1] (populated by the snow stage).
    pub snow_cover: Option<Vec<f64>>,
    /// Solar elevation above the horizon (degrees, signed) (populated by the solar stage).
    pub elevation_deg: Option<Vec<f64>>,
    /// Light direction in the East-North-Up frame (populated by the solar stage).
    pub light_direction: Option<Vec<DVec3>>,
    /// Sunrise/sunset classification for the day (populated by the solar stage).
    pub sun_cycle: Option<SunCycle>,
    /// Normalized light intensity in [0, 1] (populated by the light stage).
    pub light_intensity: Option<Vec<f64>>,
    /// Sky color, RGB on the 0-1 scale (populated by the light stage).
    pub sky_color: Option<Vec<DVec3>>,
    /// Sun color, RGB on the 0-1 scale (populated by the light stage).
    pub sun_color: Option<Vec<DVec3>>,
}

impl DayTimeline {
    /// Creates an empty timeline with no columns populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rows every populated column must have.
    pub fn sample_count(&self) -> usize {
        SAMPLES_PER_DAY
    }

    /// Returns an iterator over every sampled minute, 0 through 1440.
    pub fn minutes(&self) -> impl Iterator<Item = u32> {
        0..=MINUTES_PER_DAY
    }

    /// Returns true once every column has been populated.
    pub fn is_complete(&self) -> bool {
        self.temperature_c.is_some()
            && self.snow_cover.is_some()
            && self.elevation_deg.is_some()
            && self.light_direction.is_some()
            && self.sun_cycle.is_some()
            && self.light_intensity.is_some()
            && self.sky_color.is_some()
            && self.sun_color.is_some()
    }

    /// Computes the (min, max) temperature over the day, if populated.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let temps = self.temperature_c.as_ref()?;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &t in temps {
            min = min.min(t);
            max = max.max(t);
        }
        Some((min, max))
    }

    /// Computes the (min, max) solar elevation over the day, if populated.
    pub fn elevation_range(&self) -> Option<(f64, f64)> {
        let elevations = self.elevation_deg.as_ref()?;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &e in elevations {
            min = min.min(e);
            max = max.max(e);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_to_hhmm() {
        assert_eq!(minute_to_hhmm(0), "00:00");
        assert_eq!(minute_to_hhmm(150), "02:30");
        assert_eq!(minute_to_hhmm(719), "11:59");
        assert_eq!(minute_to_hhmm(1440), "24:00");
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = DayTimeline::new();
        assert!(!timeline.is_complete());
        assert!(timeline.temperature_range().is_none());
        assert_eq!(timeline.sample_count(), 1441);
    }

    #[test]
    fn test_minutes_iterator_covers_closing_boundary() {
        let timeline = DayTimeline::new();
        let minutes: Vec<u32> = timeline.minutes().collect();
        assert_eq!(minutes.len(), SAMPLES_PER_DAY);
        assert_eq!(minutes[0], 0);
        assert_eq!(*minutes.last().unwrap(), MINUTES_PER_DAY);
    }

    #[test]
    fn test_temperature_range() {
        let mut timeline = DayTimeline::new();
        let mut temps = vec![0.0; SAMPLES_PER_DAY];
        temps[100] = -12.5;
        temps[800] = 9.0;
        timeline.temperature_c = Some(temps);

        let (min, max) = timeline.temperature_range().unwrap();
        assert_eq!(min, -12.5);
        assert_eq!(max, 9.0);
    }
}
