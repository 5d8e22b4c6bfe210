pub mod coords;
pub mod direction;
pub mod error;
pub mod geo;
pub mod kernel;
pub mod options;
pub mod real;
pub mod units;

pub use coords::{normalize, Axis, CoordinateMode, Point, PointArray};
pub use direction::{Bearing, Direction};
pub use error::{Error, Result};
pub use geo::{destination, distance};
pub use options::{DestinationOptions, DistanceOptions};
pub use units::{factor_for, factor_for_code, Unit};

/// Mean earth radius in kilometers. See https://en.wikipedia.org/wiki/Earth_radius#Mean_radius
pub const EARTH_RADIUS_KM: f64 = 6371.0088;
