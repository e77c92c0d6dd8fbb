//! Rectangular extents in projected coordinates
//!
//! Extents are usually copied from a GIS extent widget, which renders them as
//! `"x1,y1 : x2,y2"` with the first corner bottom-left and the second
//! top-right.

use crate::error::{Error, Result};
use geo::Coord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Extent given by its bottom-left and top-right corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Extent {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bottom-left corner
    pub fn lower_left(&self) -> Coord {
        Coord { x: self.x1, y: self.y1 }
    }

    /// Top-right corner
    pub fn upper_right(&self) -> Coord {
        Coord { x: self.x2, y: self.y2 }
    }
}

impl FromStr for Extent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_extent(s)
    }
}

/// Parses `"x1,y1 : x2,y2"` into an [`Extent`]
pub fn parse_extent(extent: &str) -> Result<Extent> {
    let invalid = || Error::InvalidExtent(extent.to_string());

    let (lower, upper) = extent.split_once(':').ok_or_else(invalid)?;
    let (x1, y1) = parse_pair(lower).ok_or_else(invalid)?;
    let (x2, y2) = parse_pair(upper).ok_or_else(invalid)?;

    Ok(Extent { x1, y1, x2, y2 })
}

fn parse_pair(pair: &str) -> Option<(f64, f64)> {
    let (x, y) = pair.split_once(',')?;
    Some((parse_number(x)?, parse_number(y)?))
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
