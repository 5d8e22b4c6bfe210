//! Distance and destination calls for single points, in degrees.
use crate::coords::{normalize, Point};
use crate::direction::Bearing;
use crate::error::Result;
use crate::kernel;
use crate::options::{DestinationOptions, DistanceOptions};

/// Great-circle distance between two points, in `options.unit`.
///
/// Points are checked or normalized according to `options.coordinates` first. `options.combination` is ignored.
pub fn distance(
    point1: impl Into<Point>,
    point2: impl Into<Point>,
    options: &DistanceOptions,
) -> Result<f64> {
    let (lat1, lng1) = options.coordinates.apply(point1.into())?.to_radians();
    let (lat2, lng2) = options.coordinates.apply(point2.into())?.to_radians();
    Ok(options.unit.earth_radius() * kernel::central_angle(lat1, lng1, lat2, lng2))
}

/// The point reached by travelling `distance`, in `options.unit`, from `start` in the direction of `bearing`.
///
/// Unless `options.normalize_output` is set, the result isn't wrapped, so the longitude can end up past ±180°.
pub fn destination(
    start: impl Into<Point>,
    distance: f64,
    bearing: impl Into<Bearing>,
    options: &DestinationOptions,
) -> Point {
    let start: Point = start.into();
    let bearing: Bearing = bearing.into();
    let (lat, lng) = start.to_radians();
    let d = distance / options.unit.earth_radius();
    let (lat2, lng2) = kernel::destination(lat, lng, bearing.radians(), d);
    let out = Point::new(lat2.to_degrees(), lng2.to_degrees());
    if options.normalize_output {
        let (lat, lon) = normalize(out.lat, out.lon);
        Point::new(lat, lon)
    } else {
        out
    }
}
