use crate::{
    destination, destination_batch, distance, distance_batch, BatchDistances, Bearing,
    DestinationOptions, DistanceOptions, Point, PointArray, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default options for every call, usually loaded from a TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaversineConfig {
    /// See [`DistanceOptions`].
    #[serde(default)]
    pub distance: DistanceOptions,
    /// See [`DestinationOptions`].
    #[serde(default)]
    pub destination: DestinationOptions,
}

static DEFAULT_CONFIG_FILE: &str = include_str!("default-config.toml");

impl Default for HaversineConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).unwrap()
    }
}

impl HaversineConfig {
    /// Parse a config from a TOML string. Missing tables or fields fall back to their defaults.
    pub fn from_toml(data: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(data)?)
    }
    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading config");
        let buf = std::fs::read(path)?;
        let data = String::from_utf8(buf)?;
        Self::from_toml(&data)
    }
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// [`distance`] with the configured options.
    pub fn distance(&self, point1: impl Into<Point>, point2: impl Into<Point>) -> Result<f64> {
        distance(point1, point2, &self.distance)
    }
    /// [`distance_batch`] with the configured options.
    pub fn distance_batch(
        &self,
        points1: impl Into<PointArray>,
        points2: impl Into<PointArray>,
    ) -> Result<BatchDistances> {
        distance_batch(points1, points2, &self.distance)
    }
    /// [`destination`] with the configured options.
    pub fn destination(
        &self,
        start: impl Into<Point>,
        distance: f64,
        bearing: impl Into<Bearing>,
    ) -> Point {
        destination(start, distance, bearing, &self.destination)
    }
    /// [`destination_batch`] with the configured options.
    pub fn destination_batch<B: Into<Bearing> + Copy>(
        &self,
        points: impl Into<PointArray>,
        distances: &[f64],
        bearings: &[B],
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        destination_batch(points, distances, bearings, &self.destination)
    }
}

/// Why a [`HaversineConfig`] couldn't be loaded.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file couldn't be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The config file has bytes that aren't valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Malformed TOML, or a unit code or coordinate mode that doesn't exist.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoordinateMode, Unit};

    #[test]
    fn default_file_matches_defaults() {
        let cfg = HaversineConfig::default();
        assert_eq!(cfg.distance, DistanceOptions::default());
        assert_eq!(cfg.destination, DestinationOptions::default());
    }

    #[test]
    fn partial_config() {
        let cfg = HaversineConfig::from_toml(
            r#"
            [distance]
            unit = "miles"
            mode = "normalize"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.distance.unit, Unit::Miles);
        assert_eq!(cfg.distance.coordinates, CoordinateMode::Normalize);
        assert!(!cfg.distance.combination);
        assert_eq!(cfg.destination, DestinationOptions::default());
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(HaversineConfig::from_toml("").unwrap(), HaversineConfig::default());
        let cfg = HaversineConfig::from_toml("[destination]\nunit = \"nmi\"").unwrap();
        assert_eq!(cfg.distance, DistanceOptions::default());
        assert_eq!(cfg.destination.unit, Unit::NauticalMiles);
        assert!(!cfg.destination.normalize_output);
    }

    #[test]
    fn bad_utf8_file() {
        let path = std::env::temp_dir().join(format!("haversine-bad-{}.toml", std::process::id()));
        std::fs::write(&path, [0x5b, 0xff, 0xfe, 0x5d]).unwrap();
        let err = HaversineConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigLoadError::Utf8(_)));
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let err = HaversineConfig::from_toml("[distance]\nunit = \"parsecs\"").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Toml(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = HaversineConfig {
            distance: DistanceOptions::new(Unit::Feet).with_combination(true),
            destination: DestinationOptions::new(Unit::Radians).with_normalized_output(true),
        };
        let text = cfg.to_toml().unwrap();
        assert_eq!(HaversineConfig::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file() {
        let err = HaversineConfig::load("/nonexistent/haversine.toml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }

    #[test]
    fn calls_use_configured_units() {
        let cfg = HaversineConfig::from_toml("[distance]\nunit = \"m\"").unwrap();
        let m = cfg.distance((45.7597, 4.8422), (48.8567, 2.3508)).unwrap();
        assert!((m - 392217.2595594006).abs() < 1e-6);
    }
}
