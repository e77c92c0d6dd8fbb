//! Circular buffers around a point
//!
//! Two independent strategies are kept side by side. [`GeodesicBuffer`]
//! solves the forward geodesic problem on the ellipsoid for each vertex.
//! [`ProjectedBuffer`] draws a planar circle in a local azimuthal
//! equidistant projection and unprojects it. Their vertices agree closely
//! for small radii and drift apart as the radius grows.

use crate::error::{Error, Result};
use crate::geodesic::GeodesicSolver;
use crate::projection::{ProjTransform, ProjectionSpec, ProjectionTransform};
use crate::shape::FromCoords;
use geo::Coord;
use std::f64::consts::PI;

/// A way of approximating a circle of fixed radius around a point
pub trait PointBuffer {
    /// `segments` vertices around `center` at `radius_m`, not closed
    fn ring(&self, center: Coord, segments: usize, radius_m: f64) -> Result<Vec<Coord>>;
}

/// Buffer built from forward geodesic solutions
pub struct GeodesicBuffer<'a, G: GeodesicSolver> {
    solver: &'a G,
}

impl<'a, G: GeodesicSolver> GeodesicBuffer<'a, G> {
    pub fn new(solver: &'a G) -> Self {
        Self { solver }
    }
}

impl<G: GeodesicSolver> PointBuffer for GeodesicBuffer<'_, G> {
    fn ring(&self, center: Coord, segments: usize, radius_m: f64) -> Result<Vec<Coord>> {
        ensure_segments(segments)?;

        let step = 360.0 / segments as f64;
        (0..segments)
            .map(|i| self.solver.forward(center, step * i as f64, radius_m))
            .collect()
    }
}

/// Buffer drawn in a local azimuthal equidistant projection
///
/// The projection is on a sphere of radius
/// [`LOCAL_SPHERE_RADIUS`](crate::projection::LOCAL_SPHERE_RADIUS), so it is
/// less accurate than [`GeodesicBuffer`] over large radii.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectedBuffer;

impl PointBuffer for ProjectedBuffer {
    fn ring(&self, center: Coord, segments: usize, radius_m: f64) -> Result<Vec<Coord>> {
        ensure_segments(segments)?;

        let spec = ProjectionSpec::azimuthal_equidistant(center)?;
        let transform = ProjTransform::new(&spec)?;
        let origin = transform.forward(center)?;

        let step = 2.0 * PI / segments as f64;
        (0..segments)
            .map(|i| {
                let angle = step * i as f64;
                transform.inverse(Coord {
                    x: origin.x + radius_m * angle.sin(),
                    y: origin.y + radius_m * angle.cos(),
                })
            })
            .collect()
    }
}

/// Builds a buffer with any strategy, in the requested shape
pub fn point_buffer<S: FromCoords>(
    strategy: &impl PointBuffer,
    center: Coord,
    segments: usize,
    radius_m: f64,
) -> Result<S> {
    let ring = strategy.ring(center, segments, radius_m)?;
    tracing::debug!("point buffer of {} m with {} vertices", radius_m, ring.len());
    Ok(S::from_coords(ring))
}

/// Buffer around a point using the geodesic solver
pub fn geodesic_point_buffer<S: FromCoords>(
    solver: &impl GeodesicSolver,
    center: Coord,
    segments: usize,
    radius_m: f64,
) -> Result<S> {
    point_buffer(&GeodesicBuffer::new(solver), center, segments, radius_m)
}

/// Buffer around a point using a local projection
pub fn projected_point_buffer<S: FromCoords>(
    center: Coord,
    segments: usize,
    radius_m: f64,
) -> Result<S> {
    point_buffer(&ProjectedBuffer, center, segments, radius_m)
}

fn ensure_segments(segments: usize) -> Result<()> {
    if segments == 0 {
        return Err(Error::Precondition("buffer needs at least one segment".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::EllipsoidalSolver;
    use geo::{LineString, MultiPoint, Polygon};

    const EDINBURGH: Coord = Coord { x: -3.18907797315, y: 55.953326627 };

    #[test]
    fn test_geodesic_buffer_number_segments() {
        let solver = EllipsoidalSolver::wgs84();
        let points: MultiPoint = geodesic_point_buffer(&solver, EDINBURGH, 2000, 500_000.0).unwrap();
        assert_eq!(points.0.len(), 2000);

        let poly: Polygon = geodesic_point_buffer(&solver, EDINBURGH, 2000, 500_000.0).unwrap();
        assert_eq!(poly.exterior().0.len(), 2001);
    }

    #[test]
    fn test_geodesic_buffer_radius() {
        let solver = EllipsoidalSolver::wgs84();
        let ring: Vec<Coord> = geodesic_point_buffer(&solver, EDINBURGH, 16, 50_000.0).unwrap();
        for vertex in ring {
            let d = solver.distance(EDINBURGH, vertex).unwrap();
            assert!((d - 50_000.0).abs() < 1e-3, "vertex at {} m", d);
        }
    }

    #[test]
    fn test_geodesic_buffer_starts_due_north() {
        let solver = EllipsoidalSolver::wgs84();
        let ring: Vec<Coord> = geodesic_point_buffer(&solver, EDINBURGH, 4, 10_000.0).unwrap();
        assert!((ring[0].x - EDINBURGH.x).abs() < 1e-9);
        assert!(ring[0].y > EDINBURGH.y);
        assert!(ring[1].x > EDINBURGH.x);
        assert!(ring[2].y < EDINBURGH.y);
    }

    #[test]
    fn test_zero_segments() {
        let solver = EllipsoidalSolver::wgs84();
        let result: Result<LineString> = geodesic_point_buffer(&solver, EDINBURGH, 0, 10.0);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_projected_buffer_number_segments() {
        let poly: Polygon = projected_point_buffer(EDINBURGH, 2000, 500_000.0).unwrap();
        assert_eq!(poly.exterior().0.len(), 2001);
    }

    #[test]
    fn test_strategies_roughly_agree() {
        let solver = EllipsoidalSolver::wgs84();
        let geodesic: Vec<Coord> = point_buffer(&GeodesicBuffer::new(&solver), EDINBURGH, 8, 20_000.0).unwrap();
        let projected: Vec<Coord> = point_buffer(&ProjectedBuffer, EDINBURGH, 8, 20_000.0).unwrap();

        for (a, b) in geodesic.iter().zip(projected.iter()) {
            let gap = solver.distance(*a, *b).unwrap();
            assert!(gap < 200.0, "strategies differ by {} m", gap);
        }
    }
}
