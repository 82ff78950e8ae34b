//! Solar configuration parameters.

use serde::{Deserialize, Serialize};

/// Sign convention for the exported light-direction vector.
///
/// Both conventions live in the East-North-Up frame; they differ only in
/// whether the vector points from the scene toward the sun or along the
/// direction the light travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionConvention {
    /// Vector points from the scene toward the sun (the canonical choice).
    TowardSun,
    /// Vector points the way the light travels, i.e. the negation.
    FromSun,
}

impl Default for DirectionConvention {
    fn default() -> Self {
        DirectionConvention::TowardSun
    }
}

/// Constants describing the sun for one simulated day.
///
/// Declination stands in for season and latitude for location; neither a
/// real calendar nor geodesy is modeled. Units:
/// - latitude: degrees, positive north
/// - declination: degrees (23.5 = June solstice, -23.5 = December solstice, 0 = equinox)
/// - azimuth: degrees, clockwise from North
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolarConfig {
    pub latitude_deg: f64,
    pub declination_deg: f64,
    pub azimuth_deg: f64,
    pub convention: DirectionConvention,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self::winter_reference()
    }
}

impl SolarConfig {
    /// The reference scene: mid-southern latitude at the June solstice,
    /// i.e. a southern-hemisphere winter day.
    pub fn winter_reference() -> Self {
        Self {
            latitude_deg: -35.0,
            declination_deg: 23.5,
            azimuth_deg: 0.0,
            convention: DirectionConvention::TowardSun,
        }
    }

    /// An equinox day (zero declination) at the given latitude.
    pub fn equinox(latitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            declination_deg: 0.0,
            ..Self::winter_reference()
        }
    }
}
