//! Great-circle distances and destination points on a spherical earth.
//!
//! ```
//! use haversine::{distance, DistanceOptions, Unit};
//!
//! let lyon = (45.7597, 4.8422);
//! let paris = (48.8567, 2.3508);
//! let km = distance(lyon, paris, &DistanceOptions::default()).unwrap();
//! let mi = distance(lyon, paris, &DistanceOptions::new(Unit::Miles)).unwrap();
//! assert!((km - 392.217).abs() < 1e-3);
//! assert!((mi - 243.713).abs() < 1e-3);
//! ```
pub mod config;

pub use config::{ConfigLoadError, HaversineConfig};
pub use haversine_common::{
    coords, destination, direction, distance, factor_for, factor_for_code, kernel, normalize,
    real, units, Axis, Bearing, CoordinateMode, DestinationOptions, Direction, DistanceOptions,
    Error, Point, PointArray, Result, Unit, EARTH_RADIUS_KM,
};
pub use haversine_vector::{
    destination_batch, distance_batch, distance_matrix, distance_pairwise, BatchDistances,
};
pub use ndarray::Array2;
