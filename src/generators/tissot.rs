//! Tissot indicatrix grids

use crate::error::Result;
use crate::generators::buffer::geodesic_point_buffer;
use crate::geodesic::GeodesicSolver;
use crate::interpolate::float_range;
use geo::{Coord, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

/// Layout of a tissot indicatrix grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TissotGrid {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
    /// Divisions along each axis
    pub steps: usize,
    /// Radius of every circle, meters
    pub radius_m: f64,
    /// Vertices per circle
    pub circle_segments: usize,
}

impl Default for TissotGrid {
    fn default() -> Self {
        Self {
            min_longitude: -160.0,
            max_longitude: 161.0,
            min_latitude: -70.0,
            max_latitude: 70.0,
            steps: 8,
            radius_m: 500_000.0,
            circle_segments: 100,
        }
    }
}

/// Equal-sized geodesic circles at every grid node
///
/// Once projected, the circles show how the projection distorts area and
/// shape across the map.
pub fn tissot_indicatrix(solver: &impl GeodesicSolver, grid: &TissotGrid) -> Result<MultiPolygon> {
    let latitudes: Vec<f64> = float_range(grid.min_latitude, grid.max_latitude, grid.steps).collect();

    let mut circles = Vec::new();
    for x in float_range(grid.min_longitude, grid.max_longitude, grid.steps) {
        for &y in &latitudes {
            let circle: Polygon =
                geodesic_point_buffer(solver, Coord { x, y }, grid.circle_segments, grid.radius_m)?;
            circles.push(circle);
        }
    }

    tracing::debug!("tissot indicatrix with {} circles", circles.len());
    Ok(MultiPolygon::new(circles))
}
