//! Square buffers around a point

use crate::error::Result;
use crate::generators::buffer::geodesic_point_buffer;
use crate::generators::great_circle::great_circle;
use crate::geodesic::GeodesicSolver;
use geo::{Coord, LineString, Polygon, Rect};

/// Vertices of the circle the square is fitted around
const CIRCLE_SEGMENTS: usize = 1000;

/// Segments per great-circle edge of [`square_buffer_geodesic`]
const EDGE_SEGMENTS: usize = 100;

/// Longitude/latitude extents of a geodesic circle of diameter `size_m`
pub fn square_extents(solver: &impl GeodesicSolver, center: Coord, size_m: f64) -> Result<Rect> {
    let circle: Vec<Coord> = geodesic_point_buffer(solver, center, CIRCLE_SEGMENTS, size_m / 2.0)?;

    let (min, max) = circle.iter().fold(
        (
            Coord { x: f64::INFINITY, y: f64::INFINITY },
            Coord { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY },
        ),
        |(min, max), c| {
            (
                Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
                Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
            )
        },
    );

    Ok(Rect::new(min, max))
}

/// Square with straight edges in longitude/latitude space
///
/// The square bounds a geodesic circle of diameter `size_m`, so its edges are
/// `size_m` long only at their midpoints.
pub fn square_buffer(solver: &impl GeodesicSolver, center: Coord, size_m: f64) -> Result<Polygon> {
    let rect = square_extents(solver, center, size_m)?;
    let (min, max) = (rect.min(), rect.max());

    Ok(Polygon::new(
        LineString::new(vec![
            Coord { x: min.x, y: min.y },
            Coord { x: min.x, y: max.y },
            Coord { x: max.x, y: max.y },
            Coord { x: max.x, y: min.y },
            Coord { x: min.x, y: min.y },
        ]),
        vec![],
    ))
}

/// Square with the same corners as [`square_buffer`], but geodesic edges
///
/// Edges are walked west, north, east, south and concatenated, so each
/// corner appears twice in the ring.
pub fn square_buffer_geodesic(solver: &impl GeodesicSolver, center: Coord, size_m: f64) -> Result<Polygon> {
    let rect = square_extents(solver, center, size_m)?;
    let (min, max) = (rect.min(), rect.max());

    let corners = [
        Coord { x: min.x, y: min.y },
        Coord { x: min.x, y: max.y },
        Coord { x: max.x, y: max.y },
        Coord { x: max.x, y: min.y },
        Coord { x: min.x, y: min.y },
    ];

    let mut ring = Vec::with_capacity(4 * (EDGE_SEGMENTS + 1));
    for edge in corners.windows(2) {
        let coords: Vec<Coord> = great_circle(solver, edge[0], edge[1], EDGE_SEGMENTS)?;
        ring.extend(coords);
    }

    Ok(Polygon::new(LineString::new(ring), vec![]))
}
