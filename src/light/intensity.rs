//! Sunlight intensity falloff.

use std::f64::consts::{FRAC_PI_2, LN_10};

use super::LightConfig;

/// Normalized sunlight intensity in [0, 1] for a solar elevation (degrees).
///
/// Exponential decay of the zenith angle raised to the falloff exponent.
/// The bias term (π/2)^e / ln 10 normalizes the curve so an elevation of 0°
/// always maps to 0.1 regardless of the exponent; with `seasonal_exponent`
/// on, the exponent becomes daylight/60 + 1 so longer days hold intensity
/// longer toward the horizon.
pub fn intensity(elevation_deg: f64, daylight_minutes: u32, cfg: &LightConfig) -> f64 {
    let exponent = if cfg.seasonal_exponent {
        daylight_minutes as f64 / 60.0 + 1.0
    } else {
        cfg.falloff_exponent
    };

    let zenith = (90.0 - elevation_deg).to_radians();
    let bias = FRAC_PI_2.powf(exponent) / LN_10;

    (-zenith.powf(exponent) / bias).exp().clamp(0.0, 1.0)
}
