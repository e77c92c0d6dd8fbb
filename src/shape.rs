//! Output representations for generated coordinate sequences
//!
//! Generators produce one ordered run of coordinates and hand it to the shape
//! the caller asked for, either statically through [`FromCoords`] or at
//! runtime through [`ShapeKind`].

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Geometry that can be built from a single ordered coordinate sequence
pub trait FromCoords: Sized {
    fn from_coords(coords: Vec<Coord>) -> Self;
}

impl FromCoords for Vec<Coord> {
    fn from_coords(coords: Vec<Coord>) -> Self {
        coords
    }
}

impl FromCoords for MultiPoint {
    fn from_coords(coords: Vec<Coord>) -> Self {
        MultiPoint::new(coords.into_iter().map(Point::from).collect())
    }
}

impl FromCoords for LineString {
    fn from_coords(coords: Vec<Coord>) -> Self {
        LineString::new(coords)
    }
}

/// The exterior ring is closed: the first coordinate is repeated at the end
/// when the sequence does not already end on it.
impl FromCoords for Polygon {
    fn from_coords(coords: Vec<Coord>) -> Self {
        Polygon::new(LineString::new(coords), vec![])
    }
}

impl FromCoords for MultiLineString {
    fn from_coords(coords: Vec<Coord>) -> Self {
        MultiLineString::new(vec![LineString::new(coords)])
    }
}

impl FromCoords for MultiPolygon {
    fn from_coords(coords: Vec<Coord>) -> Self {
        MultiPolygon::new(vec![Polygon::from_coords(coords)])
    }
}

/// Shape selected at runtime, e.g. from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    MultiPoint,
    LineString,
    Polygon,
    MultiLineString,
    MultiPolygon,
}

impl ShapeKind {
    /// Builds the selected geometry from a coordinate sequence
    pub fn build(&self, coords: Vec<Coord>) -> Geometry {
        match self {
            ShapeKind::MultiPoint => MultiPoint::from_coords(coords).into(),
            ShapeKind::LineString => LineString::from_coords(coords).into(),
            ShapeKind::Polygon => Polygon::from_coords(coords).into(),
            ShapeKind::MultiLineString => MultiLineString::from_coords(coords).into(),
            ShapeKind::MultiPolygon => MultiPolygon::from_coords(coords).into(),
        }
    }
}
