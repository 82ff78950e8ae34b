//! Sunrise/sunset detection over a sampled elevation sequence.

use serde::{Deserialize, Serialize};

use crate::timeline::MINUTES_PER_DAY;

/// Outcome of scanning one day of elevation samples for horizon crossings.
///
/// The three cases are mutually exclusive; downstream code never sees
/// sentinel infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunCycle {
    /// The sun both rises and sets during the day.
    Normal {
        sunrise_minute: u32,
        sunset_minute: u32,
    },
    /// The sun never dips below the horizon.
    MidnightSun,
    /// The sun never reaches the horizon.
    PolarNight,
}

impl SunCycle {
    /// Minutes of daylight for the day.
    pub fn daylight_minutes(&self) -> u32 {
        match *self {
            SunCycle::Normal {
                sunrise_minute,
                sunset_minute,
            } => sunset_minute.saturating_sub(sunrise_minute),
            SunCycle::MidnightSun => MINUTES_PER_DAY,
            SunCycle::PolarNight => 0,
        }
    }
}

/// Scans per-minute elevation samples (index == minute) for the first
/// sunrise and first sunset crossing.
///
/// A negative→non-negative step is a sunrise, a non-negative→negative step a
/// sunset; only the first of each kind is reported, so a day with multiple
/// crossings (near-polar transition seasons) keeps the earliest pair. A day
/// that opens already lit counts minute 0 as its sunrise; one that ends lit
/// counts the final sample as its sunset.
pub fn scan_cycle(elevations: &[f64]) -> SunCycle {
    let any_above = elevations.iter().any(|&e| e >= 0.0);
    let any_below = elevations.iter().any(|&e| e < 0.0);

    if !any_below {
        return SunCycle::MidnightSun;
    }
    if !any_above {
        return SunCycle::PolarNight;
    }

    let mut sunrise = None;
    let mut sunset = None;
    for i in 1..elevations.len() {
        let (prev, cur) = (elevations[i - 1], elevations[i]);
        if sunrise.is_none() && prev < 0.0 && cur >= 0.0 {
            sunrise = Some(i as u32);
        }
        if sunset.is_none() && prev >= 0.0 && cur < 0.0 {
            sunset = Some(i as u32);
        }
    }

    SunCycle::Normal {
        sunrise_minute: sunrise.unwrap_or(0),
        sunset_minute: sunset.unwrap_or(elevations.len() as u32 - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::SAMPLES_PER_DAY;

    fn day_with_crossings(up: usize, down: usize) -> Vec<f64> {
        let mut elevations = vec![-1.0; SAMPLES_PER_DAY];
        for e in &mut elevations[up..down] {
            *e = 1.0;
        }
        elevations
    }

    #[test]
    fn single_crossing_round_trip() {
        let cycle = scan_cycle(&day_with_crossings(371, 1069));
        assert_eq!(
            cycle,
            SunCycle::Normal {
                sunrise_minute: 371,
                sunset_minute: 1069
            }
        );
        assert_eq!(cycle.daylight_minutes(), 698);
    }

    #[test]
    fn midnight_sun_when_never_negative() {
        let elevations = vec![0.5; SAMPLES_PER_DAY];
        let cycle = scan_cycle(&elevations);
        assert_eq!(cycle, SunCycle::MidnightSun);
        assert_eq!(cycle.daylight_minutes(), 1440);
    }

    #[test]
    fn zero_elevation_all_day_counts_as_midnight_sun() {
        // Horizon-grazing sun: non-negative everywhere.
        let cycle = scan_cycle(&vec![0.0; SAMPLES_PER_DAY]);
        assert_eq!(cycle, SunCycle::MidnightSun);
    }

    #[test]
    fn polar_night_when_never_non_negative() {
        let elevations = vec![-3.0; SAMPLES_PER_DAY];
        let cycle = scan_cycle(&elevations);
        assert_eq!(cycle, SunCycle::PolarNight);
        assert_eq!(cycle.daylight_minutes(), 0);
    }

    #[test]
    fn first_crossing_of_each_kind_wins() {
        // Two lit windows; only the first sunrise and first sunset count.
        let mut elevations = vec![-1.0; SAMPLES_PER_DAY];
        for e in &mut elevations[300..600] {
            *e = 1.0;
        }
        for e in &mut elevations[900..1200] {
            *e = 1.0;
        }

        let cycle = scan_cycle(&elevations);
        assert_eq!(
            cycle,
            SunCycle::Normal {
                sunrise_minute: 300,
                sunset_minute: 600
            }
        );
    }

    #[test]
    fn day_opening_lit_counts_minute_zero_as_sunrise() {
        let mut elevations = vec![1.0; SAMPLES_PER_DAY];
        for e in &mut elevations[1000..] {
            *e = -1.0;
        }

        let cycle = scan_cycle(&elevations);
        assert_eq!(
            cycle,
            SunCycle::Normal {
                sunrise_minute: 0,
                sunset_minute: 1000
            }
        );
    }

    #[test]
    fn reference_geometry_produces_a_plausible_winter_day() {
        use crate::solar::elevation_deg;

        let elevations: Vec<f64> = (0..SAMPLES_PER_DAY)
            .map(|m| elevation_deg(-35.0, 23.5, m as f64))
            .collect();
        match scan_cycle(&elevations) {
            SunCycle::Normal {
                sunrise_minute,
                sunset_minute,
            } => {
                assert!(sunrise_minute < 720, "sunrise after noon");
                assert!(sunset_minute > 720, "sunset before noon");
                // Southern winter: well under 12 hours of daylight.
                let daylight = sunset_minute - sunrise_minute;
                assert!(daylight < 720, "daylight {} too long", daylight);
                assert!(daylight > 480, "daylight {} too short", daylight);
            }
            other => panic!("expected a normal day, got {:?}", other),
        }
    }
}
