//! Great-circle (geodesic) paths
//!
//! "Great circle" is used loosely: on an ellipsoid these are geodesics, and
//! only on [`Ellipsoid::Sphere`](crate::geodesic::Ellipsoid::Sphere) do the
//! sweeps below come back around through their starting point.

use crate::error::{Error, Result};
use crate::geodesic::GeodesicSolver;
use crate::interpolate::float_range_by;
use crate::shape::FromCoords;
use geo::{Coord, LineString, MultiLineString, MultiPoint, Point};
use serde::{Deserialize, Serialize};

/// Equatorial circumference used to size sweeps, in meters
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_000.0;

/// Distance between sweep points, in meters
pub const SWEEP_STEP_M: f64 = 10_000.0;

/// Geodesic arc from `start` to `end` with `segments` segments
///
/// The result has exactly `segments + 1` vertices; the first and last are
/// `start` and `end` as given.
pub fn great_circle<S: FromCoords>(
    solver: &impl GeodesicSolver,
    start: Coord,
    end: Coord,
    segments: usize,
) -> Result<S> {
    if segments == 0 {
        return Err(Error::Precondition("great circle needs at least one segment".to_string()));
    }

    let mut coords = Vec::with_capacity(segments + 1);
    coords.push(start);
    coords.extend(solver.intermediate_points(start, end, segments - 1)?);
    coords.push(end);

    tracing::debug!("great circle with {} vertices", coords.len());
    Ok(S::from_coords(coords))
}

/// Box whose four edges are geodesics between the given corners
///
/// Edges are returned west, north, east, south. The west and east edges run
/// south to north; the north and south edges run west to east.
pub fn bounding_box(
    solver: &impl GeodesicSolver,
    south_west: Coord,
    north_east: Coord,
    segments: usize,
) -> Result<MultiLineString> {
    let north_west = Coord { x: south_west.x, y: north_east.y };
    let south_east = Coord { x: north_east.x, y: south_west.y };

    let west: LineString = great_circle(solver, south_west, north_west, segments)?;
    let east: LineString = great_circle(solver, south_east, north_east, segments)?;
    let north: LineString = great_circle(solver, north_west, north_east, segments)?;
    let south: LineString = great_circle(solver, south_west, south_east, segments)?;

    Ok(MultiLineString::new(vec![west, north, east, south]))
}

/// Length and spacing of a full-circle sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sweep {
    pub circumference_m: f64,
    pub step_m: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            circumference_m: EARTH_CIRCUMFERENCE_M,
            step_m: SWEEP_STEP_M,
        }
    }
}

impl Sweep {
    fn distances(&self) -> Result<impl Iterator<Item = f64>> {
        float_range_by(0.0, self.circumference_m, self.step_m)
    }
}

/// Points around the whole great circle through `a` and `b`
///
/// Walks from `a` along its initial azimuth toward `b`. The point count
/// depends only on the sweep, never on the distance between `a` and `b`.
/// On an ellipsoid the path does not quite close; use the sphere for that.
pub fn great_circle_through(
    solver: &impl GeodesicSolver,
    a: Coord,
    b: Coord,
    sweep: &Sweep,
) -> Result<MultiPoint> {
    let azimuth = solver.inverse(a, b)?.azimuth;

    let points = sweep
        .distances()?
        .map(|d| solver.forward(a, azimuth, d).map(Point::from))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("great circle sweep with {} points", points.len());
    Ok(MultiPoint::new(points))
}

/// Like [`great_circle_through`], but walks from both points at once
///
/// Points alternate: one from `a` heading toward `b`, one from `b` heading
/// toward `a`. Where an ellipsoid leaves a gap, the two walks cover it.
pub fn great_circle_through_both(
    solver: &impl GeodesicSolver,
    a: Coord,
    b: Coord,
    sweep: &Sweep,
) -> Result<MultiPoint> {
    let from_a = solver.inverse(a, b)?.azimuth;
    let from_b = solver.inverse(b, a)?.azimuth;

    let mut points = Vec::new();
    for d in sweep.distances()? {
        points.push(Point::from(solver.forward(a, from_a, d)?));
        points.push(Point::from(solver.forward(b, from_b, d)?));
    }

    Ok(MultiPoint::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::{Ellipsoid, EllipsoidalSolver};
    use geo::Polygon;

    const EDINBURGH: Coord = Coord { x: -3.18904598892, y: 55.9532968753 };
    const GIZA: Coord = Coord { x: 31.130786522, y: 29.9759689257 };
    const RAPA_NUI: Coord = Coord { x: -109.28894, y: -27.12201 };
    const KHEOPS: Coord = Coord { x: 31.13074, y: 29.97594 };

    #[test]
    fn test_great_circle_number_segments() {
        let solver = EllipsoidalSolver::wgs84();
        let line: LineString = great_circle(&solver, EDINBURGH, GIZA, 1000).unwrap();
        assert_eq!(line.0.len(), 1001);
    }

    #[test]
    fn test_great_circle_start_end_points() {
        let solver = EllipsoidalSolver::wgs84();
        let line: LineString = great_circle(&solver, EDINBURGH, GIZA, 1000).unwrap();
        let first = line.0[0];
        let last = line.0[line.0.len() - 1];
        assert!((first.x - EDINBURGH.x).abs() < 1e-7);
        assert!((first.y - EDINBURGH.y).abs() < 1e-7);
        assert!((last.x - GIZA.x).abs() < 1e-7);
        assert!((last.y - GIZA.y).abs() < 1e-7);
    }

    #[test]
    fn test_great_circle_geometry_types() {
        let solver = EllipsoidalSolver::wgs84();
        let poly: Polygon = great_circle(&solver, EDINBURGH, GIZA, 1000).unwrap();
        assert_eq!(poly.exterior().0.len(), 1002);

        let points: MultiPoint = great_circle(&solver, EDINBURGH, GIZA, 1000).unwrap();
        assert_eq!(points.0.len(), 1001);
    }

    #[test]
    fn test_great_circle_single_segment() {
        let solver = EllipsoidalSolver::wgs84();
        let coords: Vec<Coord> = great_circle(&solver, EDINBURGH, GIZA, 1).unwrap();
        assert_eq!(coords, vec![EDINBURGH, GIZA]);
    }

    #[test]
    fn test_great_circle_zero_segments() {
        let solver = EllipsoidalSolver::wgs84();
        let result: Result<LineString> = great_circle(&solver, EDINBURGH, GIZA, 0);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_great_circle_bends_toward_pole() {
        // Along the 45th parallel the geodesic midpoint sits north of it
        let solver = EllipsoidalSolver::wgs84();
        let coords: Vec<Coord> = great_circle(
            &solver,
            Coord { x: -60.0, y: 45.0 },
            Coord { x: 60.0, y: 45.0 },
            2,
        )
        .unwrap();
        assert!(coords[1].y > 50.0);
        assert!(coords[1].x.abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box() {
        let solver = EllipsoidalSolver::wgs84();
        let bbox = bounding_box(&solver, Coord { x: 10.0, y: 20.0 }, Coord { x: 45.0, y: 32.0 }, 1000).unwrap();
        assert_eq!(bbox.0.len(), 4);
        assert!(bbox.0.iter().all(|line| line.0.len() == 1001));

        let west = &bbox.0[0];
        assert_eq!(west.0[0], Coord { x: 10.0, y: 20.0 });
        assert_eq!(west.0[1000], Coord { x: 10.0, y: 32.0 });
        let north = &bbox.0[1];
        assert_eq!(north.0[1000], Coord { x: 45.0, y: 32.0 });
    }

    #[test]
    fn test_sweep_point_count_is_fixed() {
        let solver = EllipsoidalSolver::wgs84();
        let near: MultiPoint = great_circle_through(&solver, EDINBURGH, GIZA, &Sweep::default()).unwrap();
        let far: MultiPoint =
            great_circle_through(&solver, Coord { x: -3.0, y: 55.97 }, Coord { x: 151.209444, y: -33.865 }, &Sweep::default())
                .unwrap();
        assert_eq!(near.0.len(), 4009);
        assert_eq!(far.0.len(), 4009);
    }

    #[test]
    fn test_sweep_on_sphere_passes_through_target() {
        let solver = EllipsoidalSolver::new(Ellipsoid::Sphere);
        let sweep = great_circle_through(&solver, RAPA_NUI, KHEOPS, &Sweep::default()).unwrap();

        let closest = sweep
            .0
            .iter()
            .map(|p| solver.distance(p.0, KHEOPS).unwrap())
            .fold(f64::INFINITY, f64::min);
        assert!(closest < SWEEP_STEP_M, "closest approach {} m", closest);
    }

    #[test]
    fn test_sweep_from_both_ends() {
        let solver = EllipsoidalSolver::new(Ellipsoid::Sphere);
        let sweep = Sweep {
            circumference_m: 1_000_000.0,
            step_m: 250_000.0,
        };
        let points = great_circle_through_both(&solver, RAPA_NUI, KHEOPS, &sweep).unwrap();
        // 0, 250k, 500k, 750k, 1000k, then 1000k again; two points each
        assert_eq!(points.0.len(), 12);
        assert!((points.0[0].x() - RAPA_NUI.x).abs() < 1e-9);
        assert!((points.0[1].x() - KHEOPS.x).abs() < 1e-9);
    }
}
