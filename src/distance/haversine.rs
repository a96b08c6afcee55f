//! Haversine distance.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `(lat, lng)` points in degrees.
///
/// The result is a metric on the sphere: symmetric, zero for identical
/// points, and satisfies the triangle inequality.
///
/// # Examples
///
/// ```
/// use geo_routing::distance::haversine_km;
///
/// // One degree of longitude along the equator.
/// let d = haversine_km((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km((10.0, 20.0), (10.0, 20.0)), 0.0);
/// ```
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lng2) = (b.0.to_radians(), b.1.to_radians());
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
