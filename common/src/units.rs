use crate::error::{Error, Result};
use crate::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A unit that distances can be given or returned in.
///
/// `Radians` and `Degrees` aren't lengths, but the central angle on a sphere of radius [`EARTH_RADIUS_KM`], so
/// asking for a distance in them returns the angle between the points instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "km", alias = "kilometers")]
    Kilometers,
    #[serde(rename = "m", alias = "meters")]
    Meters,
    #[serde(rename = "mi", alias = "miles")]
    Miles,
    #[serde(rename = "nmi", alias = "nautical_miles", alias = "nautical-miles")]
    NauticalMiles,
    #[serde(rename = "ft", alias = "feet")]
    Feet,
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "rad", alias = "radians")]
    Radians,
    #[serde(rename = "deg", alias = "degrees")]
    Degrees,
}

// Ratios to kilometers, from http://www.unitconversion.org/unit_converter/length.html
// Indexed by discriminant, so this has to stay in declaration order.
const CONVERSIONS: [f64; 8] = [
    1.0,
    1000.0,
    0.621371192,
    0.539956803,
    3280.839895013,
    39370.078740158,
    1.0 / EARTH_RADIUS_KM,
    (1.0 / EARTH_RADIUS_KM) * (180.0 / PI),
];

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Kilometers,
        Self::Meters,
        Self::Miles,
        Self::NauticalMiles,
        Self::Feet,
        Self::Inches,
        Self::Radians,
        Self::Degrees,
    ];

    /// Multiplier to convert a distance in kilometers to this unit.
    #[inline(always)]
    pub const fn factor(self) -> f64 {
        CONVERSIONS[self as usize]
    }
    /// The mean earth radius in this unit.
    #[inline(always)]
    pub fn earth_radius(self) -> f64 {
        EARTH_RADIUS_KM * self.factor()
    }
    /// Whether this is one of the angular pseudo-units.
    pub const fn is_angular(self) -> bool {
        matches!(self, Self::Radians | Self::Degrees)
    }
    /// The short code for this unit, as accepted by [`FromStr`].
    pub const fn code(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Miles => "mi",
            Self::NauticalMiles => "nmi",
            Self::Feet => "ft",
            Self::Inches => "in",
            Self::Radians => "rad",
            Self::Degrees => "deg",
        }
    }
    /// Look a unit up by code. Long names like `"miles"` are also accepted.
    pub fn from_code(code: &str) -> Result<Self> {
        Ok(match code {
            "km" | "kilometers" => Self::Kilometers,
            "m" | "meters" => Self::Meters,
            "mi" | "miles" => Self::Miles,
            "nmi" | "nautical_miles" | "nautical-miles" => Self::NauticalMiles,
            "ft" | "feet" => Self::Feet,
            "in" | "inches" => Self::Inches,
            "rad" | "radians" => Self::Radians,
            "deg" | "degrees" => Self::Degrees,
            _ => return Err(Error::InvalidUnit(code.to_string())),
        })
    }
}
impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
impl TryFrom<&str> for Unit {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_code(value)
    }
}

/// Multiplier to convert a distance in kilometers to `unit`.
#[inline(always)]
pub const fn factor_for(unit: Unit) -> f64 {
    unit.factor()
}

/// Same as [`factor_for`], but with the unit given by its code.
pub fn factor_for_code(code: &str) -> Result<f64> {
    Unit::from_code(code).map(Unit::factor)
}
