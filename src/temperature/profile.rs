//! Hand-authored temperature anchor tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a temperature profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile needs at least 2 anchors, got {0}")]
    TooFewAnchors(usize),
    #[error("Anchor minutes must be strictly increasing (violated at index {0})")]
    NonIncreasingMinutes(usize),
}

/// An ordered table of (minute-of-day, °C) anchors used as spline knots.
///
/// The standard profile has one anchor per hour (minute 0 through 1380).
/// Anchor minutes are validated to be strictly increasing at construction;
/// a malformed table is a fatal configuration error, not a runtime one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureProfile {
    minutes: Vec<f64>,
    values_c: Vec<f64>,
}

impl TemperatureProfile {
    /// Creates a profile from explicit (minute, °C) anchors.
    pub fn from_anchors(anchors: &[(u32, f64)]) -> Result<Self, ProfileError> {
        if anchors.len() < 2 {
            return Err(ProfileError::TooFewAnchors(anchors.len()));
        }
        for (i, pair) in anchors.windows(2).enumerate() {
            if pair[1].0 <= pair[0].0 {
                return Err(ProfileError::NonIncreasingMinutes(i + 1));
            }
        }

        Ok(Self {
            minutes: anchors.iter().map(|&(m, _)| m as f64).collect(),
            values_c: anchors.iter().map(|&(_, t)| t).collect(),
        })
    }

    /// Creates a profile from 24 hourly temperatures (minute 0, 60, .., 1380).
    pub fn hourly(temps_c: [f64; 24]) -> Self {
        let anchors: Vec<(u32, f64)> = temps_c
            .iter()
            .enumerate()
            .map(|(hour, &t)| (hour as u32 * 60, t))
            .collect();
        // Hourly anchors are strictly increasing by construction.
        Self::from_anchors(&anchors).unwrap()
    }

    /// The reference winter day used by the original snow scene.
    pub fn winter_reference() -> Self {
        Self::hourly([
            -7.0, -8.0, -8.0, -9.0, -11.0, -12.0, -13.0, -10.0, -9.0, -5.0, -1.0, 2.0, 4.0, 6.0,
            9.0, 7.0, 6.0, 4.0, 1.0, -1.0, -3.0, -4.0, -5.0, -6.0,
        ])
    }

    /// Anchor minutes, strictly increasing.
    pub fn minutes(&self) -> &[f64] {
        &self.minutes
    }

    /// Anchor temperatures (°C), parallel to [`minutes`](Self::minutes).
    pub fn values(&self) -> &[f64] {
        &self.values_c
    }

    /// Number of anchors in the profile.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// Returns true if the profile has no anchors (never the case for a
    /// successfully constructed profile).
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

impl Default for TemperatureProfile {
    fn default() -> Self {
        Self::winter_reference()
    }
}
