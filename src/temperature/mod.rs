//! Temperature model: hourly anchor profile + natural cubic spline interpolation.

mod profile;
mod spline;

pub use profile::{ProfileError, TemperatureProfile};
pub use spline::CubicSpline;

use rayon::prelude::*;

use crate::timeline::SAMPLES_PER_DAY;

/// Interpolates a temperature profile at every sampled minute of the day.
///
/// Builds a natural cubic spline through the profile anchors and evaluates
/// it at minutes 0..=1440. Minutes past the last anchor clamp to the anchor
/// span, so the returned curve never extrapolates.
pub fn interpolate_profile(profile: &TemperatureProfile) -> Vec<f64> {
    let spline = CubicSpline::natural(profile.minutes(), profile.values());
    (0..SAMPLES_PER_DAY)
        .into_par_iter()
        .map(|minute| spline.eval(minute as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_covers_every_minute() {
        let profile = TemperatureProfile::default();
        let temps = interpolate_profile(&profile);
        assert_eq!(temps.len(), SAMPLES_PER_DAY);
    }

    #[test]
    fn interpolation_hits_anchor_values() {
        let profile = TemperatureProfile::default();
        let temps = interpolate_profile(&profile);

        for (&minute, &value) in profile.minutes().iter().zip(profile.values()) {
            let got = temps[minute as usize];
            assert!(
                (got - value).abs() < 1e-9,
                "anchor at minute {} expected {}, got {}",
                minute,
                value,
                got
            );
        }
    }

    #[test]
    fn minutes_past_last_anchor_clamp_to_anchor_span() {
        let profile = TemperatureProfile::default();
        let temps = interpolate_profile(&profile);

        let last = temps[1380];
        for minute in 1381..SAMPLES_PER_DAY {
            assert_eq!(temps[minute], last, "minute {} should clamp", minute);
        }
    }

    #[test]
    fn interpolation_matches_sequential_evaluation() {
        let profile = TemperatureProfile::default();
        let spline = CubicSpline::natural(profile.minutes(), profile.values());
        let parallel = interpolate_profile(&profile);

        for minute in 0..SAMPLES_PER_DAY {
            assert_eq!(parallel[minute], spline.eval(minute as f64));
        }
    }
}
