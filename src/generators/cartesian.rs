//! Straight lines in longitude/latitude space
//!
//! These lines are straight only in the plate carrée view; they are densified
//! so that they curve correctly once reprojected.

use crate::error::Result;
use crate::interpolate::{float_range, float_range_by};
use geo::{coord, Coord, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};

/// Default number of segments for densified lines
pub const DEFAULT_DENSIFY_SEGMENTS: usize = 1000;

/// Densified straight line between two points
///
/// Longitudes and latitudes are interpolated independently and paired up.
/// The line always has `segments + 1` vertices and ends exactly on `end`.
pub fn line_cartesian(start: Coord, end: Coord, segments: usize) -> LineString {
    let xs = float_range(start.x, end.x, segments);
    let ys = float_range(start.y, end.y, segments);

    let mut coords: Vec<Coord> = xs.zip(ys).take(segments).map(|(x, y)| Coord { x, y }).collect();
    coords.push(end);
    LineString::new(coords)
}

/// Rectangle of four densified straight edges (west, north, east, south)
pub fn bounding_box_cartesian(south_west: Coord, north_east: Coord, segments: usize) -> MultiLineString {
    let north_west = Coord { x: south_west.x, y: north_east.y };
    let south_east = Coord { x: north_east.x, y: south_west.y };

    MultiLineString::new(vec![
        line_cartesian(south_west, north_west, segments),
        line_cartesian(north_west, north_east, segments),
        line_cartesian(south_east, north_east, segments),
        line_cartesian(south_west, south_east, segments),
    ])
}

/// Layout of a graticule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graticule {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
    /// Spacing of meridians, degrees
    pub longitude_resolution: f64,
    /// Spacing of parallels, degrees
    pub latitude_resolution: f64,
    pub segments: usize,
}

impl Default for Graticule {
    fn default() -> Self {
        Self {
            min_longitude: -180.0,
            max_longitude: 180.0,
            min_latitude: -90.0,
            max_latitude: 90.0,
            longitude_resolution: 10.0,
            latitude_resolution: 10.0,
            segments: DEFAULT_DENSIFY_SEGMENTS,
        }
    }
}

impl Graticule {
    /// Graticule covering `bounds` at the default spacing
    pub fn within(bounds: Rect) -> Self {
        Self {
            min_longitude: bounds.min().x,
            max_longitude: bounds.max().x,
            min_latitude: bounds.min().y,
            max_latitude: bounds.max().y,
            ..Self::default()
        }
    }

    /// Sets both resolutions
    pub fn resolution(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude_resolution = longitude;
        self.latitude_resolution = latitude;
        self
    }
}

/// Meridians followed by parallels as one collection
///
/// The last meridian and parallel may be repeated because the stepped range
/// always ends on its upper bound.
pub fn graticules(layout: &Graticule) -> Result<MultiLineString> {
    let mut lines = Vec::new();

    for x in float_range_by(layout.min_longitude, layout.max_longitude, layout.longitude_resolution)? {
        lines.push(line_cartesian(
            coord! { x: x, y: layout.min_latitude },
            coord! { x: x, y: layout.max_latitude },
            layout.segments,
        ));
    }

    for y in float_range_by(layout.min_latitude, layout.max_latitude, layout.latitude_resolution)? {
        lines.push(line_cartesian(
            coord! { x: layout.min_longitude, y: y },
            coord! { x: layout.max_longitude, y: y },
            layout.segments,
        ));
    }

    tracing::debug!("graticule with {} lines", lines.len());
    Ok(MultiLineString::new(lines))
}
