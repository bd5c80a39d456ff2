//! Length and area units.
//!
//! Purpose
//! - Fixed conversion table from the supported length units to meters.
//! - Area conversion scales by the square of the linear factor.
//! - Acreage table used for report totals.
//!
//! Conventions
//! - Factors are exact constants (international foot/inch), never zero or negative.
//! - Converting within the same unit returns the input bit-for-bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Square meters in one international acre.
pub const SQUARE_METERS_PER_ACRE: f64 = 4046.856_422_4;

/// Supported length units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Meters,
    Feet,
    Inches,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Meters, Unit::Feet, Unit::Inches];

    /// Meters per one unit of length.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Feet => 0.3048,
            Unit::Inches => 0.0254,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Feet => "ft",
            Unit::Inches => "in",
        }
    }

    pub fn area_symbol(self) -> &'static str {
        match self {
            Unit::Meters => "m²",
            Unit::Feet => "ft²",
            Unit::Inches => "in²",
        }
    }

    /// Square units of `self` that make up one acre (43560 ft², 6272640 in²).
    pub fn square_units_per_acre(self) -> f64 {
        match self {
            Unit::Meters => SQUARE_METERS_PER_ACRE,
            Unit::Feet => 43_560.0,
            Unit::Inches => 6_272_640.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Meters => "meters",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown unit `{0}` (expected meters, feet or inches)")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "meter" | "m" => Ok(Unit::Meters),
            "feet" | "foot" | "ft" => Ok(Unit::Feet),
            "inches" | "inch" | "in" => Ok(Unit::Inches),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

/// Length in `unit` expressed in meters.
#[inline]
pub fn to_meters(value: f64, unit: Unit) -> f64 {
    value * unit.factor()
}

/// Re-express an area given in square `from` units as square `to` units:
/// `area * (factor(from)/factor(to))²`.
pub fn convert_area(area: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return area;
    }
    let ratio = from.factor() / to.factor();
    area * ratio * ratio
}

/// Acres covered by an area in square meters.
#[inline]
pub fn acres_from_square_meters(area_m2: f64) -> f64 {
    area_m2 / SQUARE_METERS_PER_ACRE
}
