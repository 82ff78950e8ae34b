//! Light direction vector from solar angles.

use glam::DVec3;

use super::DirectionConvention;

/// Converts solar elevation and azimuth (degrees) into a unit light
/// direction in the East-North-Up frame (x East, y North, z Up).
///
/// With [`DirectionConvention::TowardSun`] the vector points from the scene
/// toward the sun: x = −sin(az)·cos(el), y = −cos(az)·cos(el), z = sin(el).
/// [`DirectionConvention::FromSun`] negates it.
pub fn light_direction(
    elevation_deg: f64,
    azimuth_deg: f64,
    convention: DirectionConvention,
) -> DVec3 {
    let elevation = elevation_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();

    let toward_sun = DVec3::new(
        -azimuth.sin() * elevation.cos(),
        -azimuth.cos() * elevation.cos(),
        elevation.sin(),
    );

    match convention {
        DirectionConvention::TowardSun => toward_sun,
        DirectionConvention::FromSun => -toward_sun,
    }
}
