use crate::error::{Error, Result};
use crate::geodesic::ellipsoid::Ellipsoid;
use geo::Coord;
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

/// Solution of the inverse geodesic problem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverse {
    /// Initial azimuth at the first point, degrees clockwise from north
    pub azimuth: f64,
    /// Azimuth from the second point back toward the first
    pub back_azimuth: f64,
    /// Geodesic distance in meters
    pub distance: f64,
}

/// Forward and inverse geodesic problems on some reference body
///
/// Points are `Coord { x: longitude, y: latitude }` in degrees. Any input or
/// result that is not finite is reported as [`Error::Geodesic`].
pub trait GeodesicSolver {
    /// Azimuths and distance between two points
    fn inverse(&self, from: Coord, to: Coord) -> Result<Inverse>;

    /// Destination reached from `origin` along `azimuth` after `distance` meters
    fn forward(&self, origin: Coord, azimuth: f64, distance: f64) -> Result<Coord>;

    /// Geodesic distance in meters
    fn distance(&self, from: Coord, to: Coord) -> Result<f64> {
        Ok(self.inverse(from, to)?.distance)
    }

    /// `count` points evenly spaced along the geodesic, endpoints excluded
    fn intermediate_points(&self, from: Coord, to: Coord, count: usize) -> Result<Vec<Coord>> {
        let line = self.inverse(from, to)?;
        let spacing = line.distance / (count + 1) as f64;

        (1..=count)
            .map(|i| self.forward(from, line.azimuth, spacing * i as f64))
            .collect()
    }
}

/// Geodesic solver backed by geographiclib
#[derive(Debug, Clone)]
pub struct EllipsoidalSolver {
    geodesic: Geodesic,
    ellipsoid: Ellipsoid,
}

impl EllipsoidalSolver {
    /// Creates a solver for the given ellipsoid
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            geodesic: Geodesic::new(ellipsoid.semi_major_axis(), ellipsoid.flattening()),
            ellipsoid,
        }
    }

    /// Solver on WGS84
    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::Wgs84)
    }

    /// Returns the ellipsoid this solver works on
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }
}

impl Default for EllipsoidalSolver {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl GeodesicSolver for EllipsoidalSolver {
    fn inverse(&self, from: Coord, to: Coord) -> Result<Inverse> {
        ensure_finite("inverse input", &[from.x, from.y, to.x, to.y])?;

        let (distance, azimuth, azi2, _arc): (f64, f64, f64, f64) =
            self.geodesic.inverse(from.y, from.x, to.y, to.x);
        ensure_finite("inverse result", &[distance, azimuth, azi2])?;

        Ok(Inverse {
            azimuth,
            back_azimuth: reverse_azimuth(azi2),
            distance,
        })
    }

    fn forward(&self, origin: Coord, azimuth: f64, distance: f64) -> Result<Coord> {
        ensure_finite("forward input", &[origin.x, origin.y, azimuth, distance])?;

        let (lat, lon): (f64, f64) = self.geodesic.direct(origin.y, origin.x, azimuth, distance);
        ensure_finite("forward result", &[lon, lat])?;

        Ok(Coord { x: lon, y: lat })
    }
}

/// Geodesic distance on WGS84, in meters
pub fn great_circle_distance(from: Coord, to: Coord) -> Result<f64> {
    EllipsoidalSolver::wgs84().distance(from, to)
}

/// Flips a forward azimuth at the far point into the bearing back home
fn reverse_azimuth(azimuth: f64) -> f64 {
    if azimuth > 0.0 {
        azimuth - 180.0
    } else {
        azimuth + 180.0
    }
}

fn ensure_finite(stage: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::Geodesic(format!("non-finite value in {}: {:?}", stage, values)))
    }
}
