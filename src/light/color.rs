//! Day/twilight/night color blending.

use glam::DVec3;

use super::{ColorRamp, LightConfig};

/// Blends a color ramp for the given solar elevation (degrees).
///
/// Elevations at or above `day_floor_deg` return the pure day anchor;
/// between `twilight_floor_deg` and `day_floor_deg` the color blends
/// linearly twilight→day; between `night_ceiling_deg` and
/// `twilight_floor_deg` it blends night→twilight; below `night_ceiling_deg`
/// it is pure night. The same ramp shape serves both sky and sun.
pub fn blend_color(elevation_deg: f64, ramp: &ColorRamp, cfg: &LightConfig) -> DVec3 {
    if elevation_deg >= cfg.day_floor_deg {
        ramp.day
    } else if elevation_deg >= cfg.twilight_floor_deg {
        let t = bracket_fraction(elevation_deg, cfg.twilight_floor_deg, cfg.day_floor_deg);
        ramp.twilight.lerp(ramp.day, t)
    } else if elevation_deg >= cfg.night_ceiling_deg {
        let t = bracket_fraction(elevation_deg, cfg.night_ceiling_deg, cfg.twilight_floor_deg);
        ramp.night.lerp(ramp.twilight, t)
    } else {
        ramp.night
    }
}

/// Normalized position of `x` inside the bracket [lo, hi].
///
/// A zero-width bracket resolves to the upper anchor rather than dividing
/// by zero.
fn bracket_fraction(x: f64, lo: f64, hi: f64) -> f64 {
    let width = hi - lo;
    if width <= f64::EPSILON {
        return 1.0;
    }
    ((x - lo) / width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> (ColorRamp, LightConfig) {
        let cfg = LightConfig::default();
        (cfg.sky, cfg)
    }

    #[test]
    fn pure_day_at_and_above_the_day_floor() {
        let (ramp, cfg) = reference();
        assert_eq!(blend_color(20.0, &ramp, &cfg), ramp.day);
        assert_eq!(blend_color(67.0, &ramp, &cfg), ramp.day);
    }

    #[test]
    fn pure_night_below_the_night_ceiling() {
        let (ramp, cfg) = reference();
        assert_eq!(blend_color(-10.001, &ramp, &cfg), ramp.night);
        assert_eq!(blend_color(-80.0, &ramp, &cfg), ramp.night);
    }

    #[test]
    fn bracket_edges_match_their_anchors() {
        let (ramp, cfg) = reference();
        assert!(blend_color(5.0, &ramp, &cfg).abs_diff_eq(ramp.twilight, 1e-12));
        assert!(blend_color(-10.0, &ramp, &cfg).abs_diff_eq(ramp.night, 1e-12));
    }

    #[test]
    fn midpoints_blend_halfway() {
        let (ramp, cfg) = reference();
        let mid = blend_color(12.5, &ramp, &cfg);
        assert!(mid.abs_diff_eq(ramp.twilight.lerp(ramp.day, 0.5), 1e-12));

        let mid = blend_color(-2.5, &ramp, &cfg);
        assert!(mid.abs_diff_eq(ramp.night.lerp(ramp.twilight, 0.5), 1e-12));
    }

    #[test]
    fn no_discontinuity_at_bracket_boundaries() {
        let (ramp, cfg) = reference();
        let eps = 1e-9;
        for boundary in [20.0, 5.0, -10.0] {
            let below = blend_color(boundary - eps, &ramp, &cfg);
            let above = blend_color(boundary + eps, &ramp, &cfg);
            assert!(
                below.abs_diff_eq(above, 1e-6),
                "jump at {}°: {:?} vs {:?}",
                boundary,
                below,
                above
            );
        }
    }

    #[test]
    fn zero_width_bracket_resolves_to_the_upper_anchor() {
        assert_eq!(bracket_fraction(5.0, 5.0, 5.0), 1.0);
        assert_eq!(bracket_fraction(-10.0, -10.0, -10.0), 1.0);
    }

    #[test]
    fn collapsed_thresholds_still_yield_finite_colors() {
        let ramp = LightConfig::default().sky;
        let cfg = LightConfig {
            day_floor_deg: 5.0,
            twilight_floor_deg: 5.0,
            night_ceiling_deg: 5.0,
            ..LightConfig::default()
        };
        for elevation in [-20.0, 4.999999, 5.0, 30.0] {
            let color = blend_color(elevation, &ramp, &cfg);
            assert!(
                color.x.is_finite() && color.y.is_finite() && color.z.is_finite(),
                "non-finite color at {}°",
                elevation
            );
        }
    }

    #[test]
    fn sun_ramp_goes_fully_dark_at_night() {
        let cfg = LightConfig::default();
        let color = blend_color(-30.0, &cfg.sun, &cfg);
        assert_eq!(color, DVec3::ZERO);
    }
}
