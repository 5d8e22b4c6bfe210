use crate::error::{Error, Result};
use crate::real::{Batch, Real};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// A latitude-longitude pair in decimal degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}
impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
    /// Wrap this point into `[-90, 90]` latitude and `[-180, 180)` longitude. See [`normalize`].
    pub fn normalized(self) -> Self {
        let (lat, lon) = normalize(self.lat, self.lon);
        Self { lat, lon }
    }
    /// Return this point unchanged if it's in range, otherwise fail with [`Error::OutOfRange`].
    pub fn validated(self) -> Result<Self> {
        check_range(self.lat, self.lon, None)?;
        Ok(self)
    }
    /// Latitude and longitude, in radians.
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}
impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}
impl From<[f64; 2]> for Point {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}
impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.lat, value.lon)
    }
}

/// Which coordinate was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}
impl Axis {
    /// The inclusive range valid for this axis, in degrees.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }
    pub(crate) const fn bounds(self) -> &'static str {
        match self {
            Self::Latitude => "[-90, 90]",
            Self::Longitude => "[-180, 180]",
        }
    }
}
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        })
    }
}

/// What to do with input coordinates before measuring anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Reject coordinates outside of `[-90, 90]` latitude or `[-180, 180]` longitude.
    #[default]
    Validate,
    /// Wrap any coordinates into range, keeping the location on the sphere the same.
    Normalize,
    /// Use the coordinates as they are.
    Unchecked,
}
impl CoordinateMode {
    /// Get the mode from a pair of flags. Normalizing takes precedence over validating.
    pub const fn from_flags(normalize: bool, validate: bool) -> Self {
        match (normalize, validate) {
            (true, _) => Self::Normalize,
            (false, true) => Self::Validate,
            (false, false) => Self::Unchecked,
        }
    }
    /// Prepare a single point according to this mode.
    #[inline(always)]
    pub fn apply(self, point: Point) -> Result<Point> {
        match self {
            Self::Validate => point.validated(),
            Self::Normalize => Ok(point.normalized()),
            Self::Unchecked => Ok(point),
        }
    }
}

/// Check that a point is in range. `index` is only used for error reporting.
#[inline(always)]
pub fn check_range(lat: f64, lon: f64, index: Option<usize>) -> Result<()> {
    for (axis, value) in [(Axis::Latitude, lat), (Axis::Longitude, lon)] {
        let (min, max) = axis.range();
        if !(min..=max).contains(&value) {
            return Err(Error::OutOfRange { axis, value, index });
        }
    }
    Ok(())
}

/// Wrap arbitrary coordinates, in degrees, into `[-90, 90]` latitude and `[-180, 180)` longitude.
///
/// Going over a pole comes back down on the other side of the globe, so the longitude is turned around by 180°
/// whenever the latitude gets reflected. The result is the same place on the sphere as the input.
#[inline(always)]
pub fn normalize<T: Real>(lat: T, lon: T) -> (T, T) {
    let lat = turn(lat + T::splat(90.0)) - T::splat(90.0);
    let over = lat.gt(90.0);
    let lat = T::select(over, T::splat(180.0) - lat, lat);
    let lon = T::select(over, lon + T::splat(180.0), lon);
    let lon = turn(lon + T::splat(180.0)) - T::splat(180.0);
    (lat, lon)
}

/// Reduce an angle into `[0, 360)`. `rem_euclid` rounds up to exactly 360 for tiny negative inputs.
#[inline(always)]
fn turn<T: Real>(angle: T) -> T {
    let r = angle.rem_euclid(360.0);
    T::select(r.ge(360.0), r - T::splat(360.0), r)
}

/// [`normalize`] applied in place across parallel coordinate slices.
pub fn normalize_slices(lats: &mut [f64], lons: &mut [f64]) {
    debug_assert_eq!(lats.len(), lons.len());
    let mut lat_chunks = lats.chunks_exact_mut(Batch::WIDTH);
    let mut lon_chunks = lons.chunks_exact_mut(Batch::WIDTH);
    for (la, lo) in (&mut lat_chunks).zip(&mut lon_chunks) {
        let (nla, nlo) = normalize(Batch::load(la), Batch::load(lo));
        nla.store(la);
        nlo.store(lo);
    }
    for (la, lo) in lat_chunks
        .into_remainder()
        .iter_mut()
        .zip(lon_chunks.into_remainder())
    {
        (*la, *lo) = normalize(*la, *lo);
    }
}

/// A sequence of points, stored as parallel latitude and longitude columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointArray {
    lats: Vec<f64>,
    lons: Vec<f64>,
}
impl PointArray {
    pub const fn new() -> Self {
        Self {
            lats: Vec::new(),
            lons: Vec::new(),
        }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lats: Vec::with_capacity(capacity),
            lons: Vec::with_capacity(capacity),
        }
    }
    /// Build an array from separate columns, which need to be the same length.
    pub fn from_columns(lats: Vec<f64>, lons: Vec<f64>) -> Result<Self> {
        if lats.len() != lons.len() {
            return Err(Error::ShapeMismatch {
                expected: lats.len(),
                found: lons.len(),
            });
        }
        Ok(Self { lats, lons })
    }
    pub fn push(&mut self, point: Point) {
        self.lats.push(point.lat);
        self.lons.push(point.lon);
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.lats.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.lats.get(index)?, self.lons[index]))
    }
    #[inline(always)]
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }
    #[inline(always)]
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.lats
            .iter()
            .zip(&self.lons)
            .map(|(&lat, &lon)| Point::new(lat, lon))
    }
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.lats, self.lons)
    }
    /// Check that every point is in range, reporting the first one that isn't.
    pub fn validate(&self) -> Result<()> {
        self.lats
            .iter()
            .zip(&self.lons)
            .enumerate()
            .try_for_each(|(i, (&lat, &lon))| check_range(lat, lon, Some(i)))
    }
    /// Normalize every point in place.
    pub fn normalize(&mut self) {
        normalize_slices(&mut self.lats, &mut self.lons);
    }
    /// Prepare every point according to `mode`. On error, nothing has been modified.
    pub fn prepare(mut self, mode: CoordinateMode) -> Result<Self> {
        match mode {
            CoordinateMode::Validate => {
                if let Err(err) = self.validate() {
                    debug!(%err, "rejecting coordinates");
                    return Err(err);
                }
            }
            CoordinateMode::Normalize => self.normalize(),
            CoordinateMode::Unchecked => {}
        }
        Ok(self)
    }
}
impl FromIterator<Point> for PointArray {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}
impl Extend<Point> for PointArray {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (hint, _) = iter.size_hint();
        self.lats.reserve(hint);
        self.lons.reserve(hint);
        for point in iter {
            self.push(point);
        }
    }
}
impl<P: Into<Point> + Copy> From<&[P]> for PointArray {
    fn from(value: &[P]) -> Self {
        value.iter().map(|&p| p.into()).collect()
    }
}
impl<P: Into<Point>> From<Vec<P>> for PointArray {
    fn from(value: Vec<P>) -> Self {
        value.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::Lanes;

    #[test]
    fn boundaries_are_inclusive() {
        for (lat, lon) in [(-90.0, 0.0), (90.0, 0.0), (0.0, -180.0), (0.0, 180.0)] {
            assert!(check_range(lat, lon, None).is_ok(), "{lat}, {lon}");
        }
        assert_eq!(
            Point::new(-90.0001, 0.0).validated(),
            Err(Error::OutOfRange {
                axis: Axis::Latitude,
                value: -90.0001,
                index: None
            })
        );
        assert_eq!(
            Point::new(0.0, 180.0001).validated(),
            Err(Error::OutOfRange {
                axis: Axis::Longitude,
                value: 180.0001,
                index: None
            })
        );
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(Point::new(f64::NAN, 0.0).validated().is_err());
        assert!(Point::new(0.0, f64::NAN).validated().is_err());
    }

    #[test]
    fn normalize_known_values() {
        assert_eq!(Point::new(95.0, 10.0).normalized(), Point::new(85.0, -170.0));
        assert_eq!(Point::new(0.0, 540.0).normalized(), Point::new(0.0, -180.0));
        assert_eq!(Point::new(-270.0, 0.0).normalized(), Point::new(90.0, 0.0));
        assert_eq!(Point::new(450.0, 0.0).normalized(), Point::new(90.0, 0.0));
        assert_eq!(Point::new(12.5, -45.0).normalized(), Point::new(12.5, -45.0));
    }

    #[test]
    fn normalize_crosses_pole() {
        let Point { lat, lon } = Point::new(-90.0001, 0.0).normalized();
        assert!((lat + 89.9999).abs() < 1e-10);
        assert_eq!(lon, -180.0);
    }

    #[test]
    fn normalize_just_past_the_seams() {
        let below = |x: f64| f64::from_bits(x.to_bits() + 1);
        let cases = [
            (Point::new(0.0, below(-180.0)), Point::new(0.0, -180.0)),
            (Point::new(below(-90.0), 10.0), Point::new(-90.0, 10.0)),
            (Point::new(0.0, 540.0), Point::new(0.0, -180.0)),
            (Point::new(0.0, -540.0), Point::new(0.0, -180.0)),
        ];
        for (raw, expected) in cases {
            let once = raw.normalized();
            assert_eq!(once, expected, "{raw:?}");
            assert_eq!(once.normalized(), once, "{raw:?}");
            assert!(once.lon < 180.0);
        }
        let lats = [0.0, below(-90.0), 0.0, 0.0];
        let lons = [below(-180.0), 10.0, 540.0, -540.0];
        let (nla, nlo) = normalize(Lanes(lats), Lanes(lons));
        for (i, (_, expected)) in cases.iter().enumerate() {
            assert_eq!(Point::new(nla.0[i], nlo.0[i]), *expected);
        }
    }

    #[test]
    fn lanes_normalize_like_scalars() {
        let lats = [95.0, -90.0001, 400.0, -1000.5];
        let lons = [10.0, 0.0, -725.0, 33.3];
        let (nla, nlo) = normalize(Lanes(lats), Lanes(lons));
        for i in 0..4 {
            assert_eq!((nla.0[i], nlo.0[i]), normalize(lats[i], lons[i]));
        }
    }

    #[test]
    fn slices_normalize_like_points() {
        let points = [
            Point::new(91.0, 0.0),
            Point::new(-91.0, 179.0),
            Point::new(10.0, 190.0),
            Point::new(0.0, 0.0),
            Point::new(180.0, 180.0),
            Point::new(-450.0, -540.0),
        ];
        let arr = PointArray::from(&points[..])
            .prepare(CoordinateMode::Normalize)
            .unwrap();
        for (got, p) in arr.iter().zip(points) {
            assert_eq!(got, p.normalized());
        }
    }

    #[test]
    fn validate_reports_index() {
        let arr: PointArray = [(0.0, 0.0), (10.0, 10.0), (0.0, -200.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(
            arr.prepare(CoordinateMode::Validate),
            Err(Error::OutOfRange {
                axis: Axis::Longitude,
                value: -200.0,
                index: Some(2)
            })
        );
    }

    #[test]
    fn unchecked_leaves_points_alone() {
        let arr = PointArray::from(vec![(100.0, 500.0)]);
        let prepared = arr.clone().prepare(CoordinateMode::Unchecked).unwrap();
        assert_eq!(prepared, arr);
    }

    #[test]
    fn columns_must_match() {
        assert_eq!(
            PointArray::from_columns(vec![1.0, 2.0], vec![3.0]),
            Err(Error::ShapeMismatch {
                expected: 2,
                found: 1
            })
        );
        let arr = PointArray::from_columns(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert_eq!(arr.get(1), Some(Point::new(2.0, 4.0)));
        assert_eq!(arr.get(2), None);
    }

    #[test]
    fn flags_map_to_modes() {
        assert_eq!(CoordinateMode::from_flags(false, true), CoordinateMode::Validate);
        assert_eq!(CoordinateMode::from_flags(true, true), CoordinateMode::Normalize);
        assert_eq!(CoordinateMode::from_flags(true, false), CoordinateMode::Normalize);
        assert_eq!(CoordinateMode::from_flags(false, false), CoordinateMode::Unchecked);
    }
}
