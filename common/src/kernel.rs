//! Great-circle math on the unit sphere. All angles here are in radians.
use crate::real::Real;

/// Central angle between two points, using the haversine formula.
///
/// The haversine term is clamped to `[0, 1]`, since rounding can push it just past 1 for (nearly) antipodal points,
/// which would make `asin` return NaN.
#[inline(always)]
pub fn central_angle<T: Real>(lat1: T, lng1: T, lat2: T, lng2: T) -> T {
    let half = T::splat(0.5);
    let dlat = (lat2 - lat1) * half;
    let dlng = (lng2 - lng1) * half;
    let sin_dlat = dlat.sin();
    let sin_dlng = dlng.sin();
    let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * (sin_dlng * sin_dlng);
    T::splat(2.0) * a.clamp(0.0, 1.0).sqrt().asin()
}

/// The point reached by travelling `distance` (as a central angle) from a starting point, with an initial `bearing`
/// measured clockwise from north.
///
/// The returned longitude isn't wrapped, so crossing the antimeridian can leave it outside of `[-π, π]`.
#[inline(always)]
pub fn destination<T: Real>(lat: T, lng: T, bearing: T, distance: T) -> (T, T) {
    let (sin_d, cos_d) = distance.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let sin_d_cos_lat = sin_d * cos_lat;
    let lat2 = (cos_d * sin_lat + sin_d_cos_lat * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lng2 = lng + (bearing.sin() * sin_d_cos_lat).atan2(cos_d - sin_lat * lat2.sin());
    (lat2, lng2)
}
