use crate::error::{Error, Result};
use crate::projection::spec::ProjectionSpec;
use crate::shape::FromCoords;
use geo::Coord;
use proj::Proj;

/// Geographic CRS the crate works in (longitude/latitude order)
pub const GEOGRAPHIC_CRS: &str = "EPSG:4326";

/// Point transforms between geographic and one projected CRS
pub trait ProjectionTransform {
    /// Transforms a geographic coordinate into projected coordinates
    fn forward(&self, geographic: Coord) -> Result<Coord>;

    /// Transforms a projected coordinate back to geographic coordinates
    fn inverse(&self, projected: Coord) -> Result<Coord>;

    /// Inverse-transforms every point, setting aside the ones that fail
    ///
    /// Failures (typically PROJ tolerance conditions outside the projection's
    /// valid domain) never abort the batch.
    fn inverse_all(&self, points: &[Coord]) -> TransformOutcome {
        let mut outcome = TransformOutcome::with_capacity(points.len());

        for &point in points {
            match self.inverse(point) {
                Ok(geographic) => outcome.coords.push(geographic),
                Err(e) => {
                    tracing::trace!("dropping ({}, {}): {}", point.x, point.y, e);
                    outcome.dropped.push(point);
                }
            }
        }

        if !outcome.dropped.is_empty() {
            tracing::warn!(
                "inverse transform dropped {} of {} points",
                outcome.dropped.len(),
                points.len()
            );
        }

        outcome
    }
}

/// Result of a batch transform that tolerates per-point failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformOutcome {
    /// Successfully transformed points, in input order
    pub coords: Vec<Coord>,
    /// Input points that could not be transformed
    pub dropped: Vec<Coord>,
}

impl TransformOutcome {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            dropped: Vec::new(),
        }
    }

    /// True when no point was dropped
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Returns the points, or an error if any were dropped
    pub fn require_complete(self) -> Result<Vec<Coord>> {
        if self.is_complete() {
            Ok(self.coords)
        } else {
            Err(Error::Projection(format!(
                "{} of {} points could not be transformed",
                self.dropped.len(),
                self.dropped.len() + self.coords.len()
            )))
        }
    }

    /// Builds the requested geometry from the surviving points
    pub fn into_shape<S: FromCoords>(self) -> S {
        S::from_coords(self.coords)
    }
}

/// PROJ-backed transform between EPSG:4326 and a projected CRS
pub struct ProjTransform {
    to_projected: Proj,
    to_geographic: Proj,
    spec: ProjectionSpec,
}

impl ProjTransform {
    /// Creates both directions of the transform for a projection spec
    pub fn new(spec: &ProjectionSpec) -> Result<Self> {
        let target = spec.crs_definition();

        let to_projected = Proj::new_known_crs(GEOGRAPHIC_CRS, &target, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection to {}: {}", spec, e)))?;

        let to_geographic = Proj::new_known_crs(&target, GEOGRAPHIC_CRS, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection from {}: {}", spec, e)))?;

        Ok(Self {
            to_projected,
            to_geographic,
            spec: spec.clone(),
        })
    }

    /// Returns the projection spec
    pub fn spec(&self) -> &ProjectionSpec {
        &self.spec
    }
}

impl ProjectionTransform for ProjTransform {
    fn forward(&self, geographic: Coord) -> Result<Coord> {
        convert(&self.to_projected, geographic, "Projection")
    }

    fn inverse(&self, projected: Coord) -> Result<Coord> {
        convert(&self.to_geographic, projected, "Unprojection")
    }
}

fn convert(proj: &Proj, coord: Coord, stage: &str) -> Result<Coord> {
    let (x, y) = proj
        .convert((coord.x, coord.y))
        .map_err(|e| Error::Projection(format!("{} failed: {}", stage, e)))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(Error::Projection(format!(
            "{} of ({}, {}) is outside the valid domain",
            stage, coord.x, coord.y
        )));
    }

    Ok(Coord { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects any projected point east of `limit`
    struct WestOnly {
        limit: f64,
    }

    impl ProjectionTransform for WestOnly {
        fn forward(&self, geographic: Coord) -> Result<Coord> {
            Ok(geographic)
        }

        fn inverse(&self, projected: Coord) -> Result<Coord> {
            if projected.x > self.limit {
                Err(Error::Projection("tolerance condition".to_string()))
            } else {
                Ok(projected)
            }
        }
    }

    fn points() -> Vec<Coord> {
        (0..10).map(|i| Coord { x: i as f64, y: 0.0 }).collect()
    }

    #[test]
    fn test_inverse_all_drops_failures() {
        let outcome = WestOnly { limit: 6.5 }.inverse_all(&points());
        assert_eq!(outcome.coords.len(), 7);
        assert_eq!(outcome.dropped.len(), 3);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.dropped[0], Coord { x: 7.0, y: 0.0 });
    }

    #[test]
    fn test_require_complete() {
        let complete = WestOnly { limit: 100.0 }.inverse_all(&points());
        assert_eq!(complete.require_complete().unwrap().len(), 10);

        let partial = WestOnly { limit: 0.5 }.inverse_all(&points());
        assert!(matches!(partial.require_complete(), Err(Error::Projection(_))));
    }

    #[test]
    fn test_into_shape() {
        let outcome = WestOnly { limit: 4.5 }.inverse_all(&points());
        let line: geo::LineString = outcome.into_shape();
        assert_eq!(line.0.len(), 5);
    }

    #[test]
    fn test_proj_transform_round_trip() {
        let spec = ProjectionSpec::new("+proj=moll +lon_0=0 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs").unwrap();
        let transform = ProjTransform::new(&spec).unwrap();
        assert_eq!(transform.spec(), &spec);
        assert!(transform.spec().crs_definition().ends_with("+type=crs"));

        let giza = Coord { x: 31.13074, y: 29.97594 };
        let projected = transform.forward(giza).unwrap();
        assert!(projected.x > 1_000_000.0);

        let back = transform.inverse(projected).unwrap();
        assert!((back.x - giza.x).abs() < 1e-6);
        assert!((back.y - giza.y).abs() < 1e-6);
    }

    #[test]
    fn test_proj_transform_bad_definition() {
        let spec = ProjectionSpec::new("+proj=definitely_not_a_projection").unwrap();
        assert!(ProjTransform::new(&spec).is_err());
    }
}
