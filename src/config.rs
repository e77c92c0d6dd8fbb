//! Engine configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! ellipsoid = "sphere"
//! great_circle_segments = 200
//! output_dir = "out"
//! outline_shape = "multi_point"
//!
//! [sweep]
//! step_m = 5000.0
//!
//! [tissot]
//! radius_m = 250000.0
//! ```

use crate::error::Result;
use crate::generators::{Graticule, Sweep, TissotGrid, DEFAULT_DENSIFY_SEGMENTS};
use crate::geodesic::{Ellipsoid, EllipsoidalSolver};
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by the generators and the demo runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reference body for geodesic calculations
    pub ellipsoid: Ellipsoid,
    /// Segments per great-circle arc
    pub great_circle_segments: usize,
    /// Vertices per circular buffer
    pub buffer_segments: usize,
    /// Segments per densified straight line or extent edge
    pub densify_segments: usize,
    pub sweep: Sweep,
    pub tissot: TissotGrid,
    pub graticule: Graticule,
    /// Shape used for projected extent outlines
    pub outline_shape: ShapeKind,
    /// Where GeoJSON dumps are written
    pub output_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::Wgs84,
            great_circle_segments: 100,
            buffer_segments: 1000,
            densify_segments: DEFAULT_DENSIFY_SEGMENTS,
            sweep: Sweep::default(),
            tissot: TissotGrid::default(),
            graticule: Graticule::default(),
            outline_shape: ShapeKind::LineString,
            output_dir: PathBuf::from("."),
        }
    }
}

impl EngineConfig {
    /// Loads a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Geodesic solver for the configured ellipsoid
    pub fn solver(&self) -> EllipsoidalSolver {
        EllipsoidalSolver::new(self.ellipsoid)
    }
}
