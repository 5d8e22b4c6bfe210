use crate::coords::CoordinateMode;
use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// Parameters for measuring distances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceOptions {
    /// Unit to return distances in.
    pub unit: Unit,
    /// How input coordinates are checked. See [`CoordinateMode`].
    #[serde(alias = "mode")]
    pub coordinates: CoordinateMode,
    /// Batches only: measure every combination of the two inputs instead of pairing them up by index.
    #[serde(alias = "comb")]
    pub combination: bool,
}
impl DistanceOptions {
    pub const fn new(unit: Unit) -> Self {
        Self {
            unit,
            coordinates: CoordinateMode::Validate,
            combination: false,
        }
    }
    pub const fn with_unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }
    pub const fn with_coordinates(self, coordinates: CoordinateMode) -> Self {
        Self {
            coordinates,
            ..self
        }
    }
    /// Shorthand for `with_coordinates(CoordinateMode::Normalize)`.
    pub const fn normalized(self) -> Self {
        self.with_coordinates(CoordinateMode::Normalize)
    }
    pub const fn with_combination(self, combination: bool) -> Self {
        Self {
            combination,
            ..self
        }
    }
}

/// Parameters for finding destination points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationOptions {
    /// Unit the travelled distance is given in.
    pub unit: Unit,
    /// Wrap the resulting points into the usual latitude/longitude ranges.
    #[serde(alias = "normalize")]
    pub normalize_output: bool,
}
impl DestinationOptions {
    pub const fn new(unit: Unit) -> Self {
        Self {
            unit,
            normalize_output: false,
        }
    }
    pub const fn with_unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }
    pub const fn with_normalized_output(self, normalize_output: bool) -> Self {
        Self {
            normalize_output,
            ..self
        }
    }
}
