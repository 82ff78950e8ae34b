//! Light configuration parameters.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Day/twilight/night color anchors for one blended channel (sky or sun).
///
/// Components are RGB on the 0-1 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorRamp {
    pub day: DVec3,
    pub twilight: DVec3,
    pub night: DVec3,
}

/// Configuration for the light intensity and color mapping.
///
/// Units:
/// - angles: degrees of solar elevation
/// - colors: RGB on the 0-1 scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    /// Falloff exponent applied to the zenith angle when `seasonal_exponent`
    /// is off.
    pub falloff_exponent: f64,
    /// Scale the exponent by day length (daylight/60 + 1) instead of using
    /// the fixed `falloff_exponent`, broadening or narrowing the intensity
    /// curve with the season.
    pub seasonal_exponent: bool,

    /// Elevation at and above which colors are pure day.
    pub day_floor_deg: f64,
    /// Elevation at which the twilight→day blend begins.
    pub twilight_floor_deg: f64,
    /// Elevation below which colors are pure night.
    pub night_ceiling_deg: f64,

    /// Sky (background) color anchors.
    pub sky: ColorRamp,
    /// Sun (light source) color anchors.
    pub sun: ColorRamp,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            falloff_exponent: 8.0,
            seasonal_exponent: false,

            day_floor_deg: 20.0,
            twilight_floor_deg: 5.0,
            night_ceiling_deg: -10.0,

            sky: ColorRamp {
                day: DVec3::new(0.53, 0.81, 0.92),
                twilight: DVec3::new(1.00, 0.76, 0.52),
                night: DVec3::new(0.10, 0.05, 0.10),
            },
            sun: ColorRamp {
                day: DVec3::new(1.00, 1.00, 0.90),
                twilight: DVec3::new(1.00, 0.50, 0.00),
                night: DVec3::new(0.00, 0.00, 0.00),
            },
        }
    }
}

impl LightConfig {
    /// The reference snow-scene palette and falloff.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Reference palette with the day-length-scaled intensity exponent on.
    pub fn seasonal() -> Self {
        Self {
            seasonal_exponent: true,
            ..Self::default()
        }
    }
}
