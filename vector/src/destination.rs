use crate::exec::{fill_pair, for_each_chunk_pair, PairKernel, CHUNK_LEN};
use haversine_common::coords::normalize;
use haversine_common::kernel;
use haversine_common::real::Real;
use haversine_common::{Bearing, DestinationOptions, Error, PointArray, Result};
use itertools::izip;
use tracing::{debug, debug_span};

/// Destination points for many starts at once.
///
/// Element `i` of the output starts at `points[i]` and travels `distances[i]` (in `options.unit`) towards
/// `bearings[i]`. All three inputs must be the same length. Returns the latitudes and longitudes separately.
pub fn destination_batch<B: Into<Bearing> + Copy>(
    points: impl Into<PointArray>,
    distances: &[f64],
    bearings: &[B],
    options: &DestinationOptions,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let points = points.into();
    let _guard = debug_span!("destination_batch", len = points.len(), unit = %options.unit).entered();
    for found in [distances.len(), bearings.len()] {
        if found != points.len() {
            let err = Error::ShapeMismatch {
                expected: points.len(),
                found,
            };
            debug!(%err, "rejecting batch");
            return Err(err);
        }
    }
    let radius = options.unit.earth_radius();
    let (angles, bearings): (Vec<f64>, Vec<f64>) = izip!(distances, bearings)
        .map(|(&d, &b)| (d / radius, Into::<Bearing>::into(b).radians()))
        .unzip();
    let kernel = Destinations {
        points: &points,
        angles: &angles,
        bearings: &bearings,
        normalize: options.normalize_output,
    };
    let mut lats = vec![0.0; points.len()];
    let mut lons = vec![0.0; points.len()];
    for_each_chunk_pair(&mut lats, &mut lons, CHUNK_LEN, |start, la, lo| {
        fill_pair(la, lo, start, &kernel)
    });
    Ok((lats, lons))
}

struct Destinations<'a> {
    points: &'a PointArray,
    angles: &'a [f64],
    bearings: &'a [f64],
    normalize: bool,
}
impl PairKernel for Destinations<'_> {
    #[inline(always)]
    fn eval<T: Real>(&self, at: usize) -> (T, T) {
        let lat = T::load(&self.points.lats()[at..]).to_radians();
        let lng = T::load(&self.points.lons()[at..]).to_radians();
        let (lat2, lng2) = kernel::destination(
            lat,
            lng,
            T::load(&self.bearings[at..]),
            T::load(&self.angles[at..]),
        );
        let (lat2, lng2) = (lat2.to_degrees(), lng2.to_degrees());
        if self.normalize {
            normalize(lat2, lng2)
        } else {
            (lat2, lng2)
        }
    }
}
