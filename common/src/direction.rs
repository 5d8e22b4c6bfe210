use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// One of the eight main compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

// Clockwise from north, indexed by discriminant.
const ANGLES: [f64; 8] = [
    0.0,
    PI * 0.25,
    PI * 0.5,
    PI * 0.75,
    PI,
    PI * 1.25,
    PI * 1.5,
    PI * 1.75,
];

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The bearing of this direction in radians, clockwise from north.
    #[inline(always)]
    pub const fn angle(self) -> f64 {
        ANGLES[self as usize]
    }
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A string that didn't name a compass direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction from its name (`"northeast"`, `"north-east"`) or abbreviation (`"NE"`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(match &*squashed {
            "n" | "north" => Self::North,
            "ne" | "northeast" => Self::NorthEast,
            "e" | "east" => Self::East,
            "se" | "southeast" => Self::SouthEast,
            "s" | "south" => Self::South,
            "sw" | "southwest" => Self::SouthWest,
            "w" | "west" => Self::West,
            "nw" | "northwest" => Self::NorthWest,
            _ => return Err(ParseDirectionError(s.to_string())),
        })
    }
}

/// Which way to travel: either a named direction or an arbitrary bearing in radians, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bearing {
    Compass(Direction),
    Radians(f64),
}
impl Bearing {
    /// Create a bearing from an angle in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::Radians(degrees.to_radians())
    }
    #[inline(always)]
    pub fn radians(self) -> f64 {
        match self {
            Self::Compass(dir) => dir.angle(),
            Self::Radians(rad) => rad,
        }
    }
}
impl From<Direction> for Bearing {
    fn from(value: Direction) -> Self {
        Self::Compass(value)
    }
}
impl From<f64> for Bearing {
    fn from(value: f64) -> Self {
        Self::Radians(value)
    }
}
impl From<Bearing> for f64 {
    fn from(value: Bearing) -> Self {
        value.radians()
    }
}
