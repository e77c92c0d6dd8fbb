//! Metric size of one degree at a given latitude

use crate::error::Result;
use crate::geodesic::GeodesicSolver;
use geo::Coord;

/// Ground length of one degree, meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeSize {
    /// One degree of longitude along the parallel
    pub longitude_m: f64,
    /// One degree of latitude northward from the parallel, `None` within a
    /// degree of the north pole
    pub latitude_m: Option<f64>,
}

/// Size of a degree of longitude and latitude at `latitude`
///
/// Sizes do not vary with longitude, so both are measured from the prime
/// meridian. Returns `Ok(None)` at or beyond the poles, where a degree of
/// longitude has no length. Above 89° north the degree of latitude would run
/// past the pole, so only `latitude_m` is `None` there.
pub fn size_of_degree_at(solver: &impl GeodesicSolver, latitude: f64) -> Result<Option<DegreeSize>> {
    if latitude.abs() >= 90.0 {
        return Ok(None);
    }

    let origin = Coord { x: 0.0, y: latitude };
    let longitude_m = solver.distance(origin, Coord { x: 1.0, y: latitude })?;

    let north = latitude + 1.0;
    let latitude_m = if north > 90.0 {
        None
    } else {
        Some(solver.distance(origin, Coord { x: 0.0, y: north })?)
    };

    Ok(Some(DegreeSize { longitude_m, latitude_m }))
}
