//! Solar elevation geometry.

/// Hour angle (degrees) for a minute of the day: 15° per hour, zero at
/// solar noon (minute 720).
pub fn hour_angle_deg(minute: f64) -> f64 {
    minute / 4.0 - 180.0
}

/// Solar elevation angle (degrees above the horizon, negative below) at the
/// given minute of the day.
///
/// Uses `asin(sin φ · sin δ + cos φ · cos δ · cos H)` with φ the latitude,
/// δ the declination, and H the hour angle. The arcsine argument is clamped
/// to [-1, 1]; floating round-off can push the product slightly outside the
/// domain when |φ| + |δ| approaches 90°.
pub fn elevation_deg(latitude_deg: f64, declination_deg: f64, minute: f64) -> f64 {
    let lat = latitude_deg.to_radians();
    let decl = declination_deg.to_radians();
    let hour_angle = hour_angle_deg(minute).to_radians();

    let sin_elevation = lat.sin() * decl.sin() + lat.cos() * decl.cos() * hour_angle.cos();
    sin_elevation.clamp(-1.0, 1.0).asin().to_degrees()
}
