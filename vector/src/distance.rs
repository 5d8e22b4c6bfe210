use crate::exec::{fill, for_each_chunk, Kernel, CHUNK_LEN};
use haversine_common::kernel::central_angle;
use haversine_common::real::Real;
use haversine_common::{DistanceOptions, Error, PointArray, Result};
use ndarray::Array2;
use tracing::{debug, debug_span};

/// Output of [`distance_batch`], depending on whether combination mode was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchDistances {
    Pairwise(Vec<f64>),
    Combination(Array2<f64>),
}
impl BatchDistances {
    pub fn into_pairwise(self) -> Option<Vec<f64>> {
        match self {
            Self::Pairwise(v) => Some(v),
            Self::Combination(_) => None,
        }
    }
    pub fn into_matrix(self) -> Option<Array2<f64>> {
        match self {
            Self::Pairwise(_) => None,
            Self::Combination(m) => Some(m),
        }
    }
}

/// Distances between two sequences of points, in `options.unit`.
///
/// If `options.combination` is set, this is [`distance_matrix`], otherwise it's [`distance_pairwise`].
pub fn distance_batch(
    points1: impl Into<PointArray>,
    points2: impl Into<PointArray>,
    options: &DistanceOptions,
) -> Result<BatchDistances> {
    if options.combination {
        distance_matrix(points1, points2, options).map(BatchDistances::Combination)
    } else {
        distance_pairwise(points1, points2, options).map(BatchDistances::Pairwise)
    }
}

/// Distances between points with the same index in each sequence. Both sequences must be the same length.
pub fn distance_pairwise(
    points1: impl Into<PointArray>,
    points2: impl Into<PointArray>,
    options: &DistanceOptions,
) -> Result<Vec<f64>> {
    let (points1, points2) = (points1.into(), points2.into());
    let _guard = debug_span!("distance_pairwise", len = points1.len(), mode = ?options.coordinates).entered();
    if points1.len() != points2.len() {
        let err = Error::ShapeMismatch {
            expected: points1.len(),
            found: points2.len(),
        };
        debug!(%err, "rejecting batch");
        return Err(err);
    }
    let points1 = points1.prepare(options.coordinates)?;
    let points2 = points2.prepare(options.coordinates)?;
    let kernel = Pairwise {
        a: &points1,
        b: &points2,
        radius: options.unit.earth_radius(),
    };
    let mut out = vec![0.0; points1.len()];
    for_each_chunk(&mut out, CHUNK_LEN, |start, chunk| fill(chunk, start, &kernel));
    Ok(out)
}

/// Distances between every combination of the two sequences.
///
/// The result has one row per point in `points2` and one column per point in `points1`, so `result[(i, j)]` is the
/// distance from `points1[j]` to `points2[i]`.
pub fn distance_matrix(
    points1: impl Into<PointArray>,
    points2: impl Into<PointArray>,
    options: &DistanceOptions,
) -> Result<Array2<f64>> {
    let (points1, points2) = (points1.into(), points2.into());
    let _guard = debug_span!(
        "distance_matrix",
        rows = points2.len(),
        cols = points1.len(),
        mode = ?options.coordinates
    )
    .entered();
    let cols = points1.prepare(options.coordinates)?;
    let rows = points2.prepare(options.coordinates)?;
    let ncols = cols.len();
    let mut out = Array2::<f64>::zeros((rows.len(), ncols));
    if let Some(data) = out.as_slice_mut().filter(|data| !data.is_empty()) {
        let radius = options.unit.earth_radius();
        for_each_chunk(data, ncols, |start, row| {
            let r = start / ncols;
            let kernel = Row {
                lat: rows.lats()[r].to_radians(),
                lng: rows.lons()[r].to_radians(),
                cols: &cols,
                radius,
            };
            fill(row, 0, &kernel);
        });
    }
    Ok(out)
}

struct Pairwise<'a> {
    a: &'a PointArray,
    b: &'a PointArray,
    radius: f64,
}
impl Kernel for Pairwise<'_> {
    #[inline(always)]
    fn eval<T: Real>(&self, at: usize) -> T {
        let lat1 = T::load(&self.a.lats()[at..]).to_radians();
        let lng1 = T::load(&self.a.lons()[at..]).to_radians();
        let lat2 = T::load(&self.b.lats()[at..]).to_radians();
        let lng2 = T::load(&self.b.lons()[at..]).to_radians();
        T::splat(self.radius) * central_angle(lat1, lng1, lat2, lng2)
    }
}

/// One row of a distance matrix: a fixed point against every column point.
struct Row<'a> {
    lat: f64,
    lng: f64,
    cols: &'a PointArray,
    radius: f64,
}
impl Kernel for Row<'_> {
    #[inline(always)]
    fn eval<T: Real>(&self, at: usize) -> T {
        let lat1 = T::load(&self.cols.lats()[at..]).to_radians();
        let lng1 = T::load(&self.cols.lons()[at..]).to_radians();
        let angle = central_angle(lat1, lng1, T::splat(self.lat), T::splat(self.lng));
        T::splat(self.radius) * angle
    }
}
