//! GeoJSON output for inspecting geometries in a desktop GIS

use crate::error::Result;
use geo::Geometry;
use geojson::{Feature, FeatureCollection, Value};
use std::fs;
use std::path::Path;

/// Wraps a geometry in a collection holding exactly one feature
pub fn geometry_to_feature_collection(geometry: &Geometry) -> FeatureCollection {
    let feature = Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(Value::from(geometry))),
        id: None,
        properties: None,
        foreign_members: None,
    };

    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

/// Writes a geometry as a pretty-printed GeoJSON feature collection
pub fn dump_geometry_to_geojson<P: AsRef<Path>>(geometry: impl Into<Geometry>, path: P) -> Result<()> {
    let collection = geometry_to_feature_collection(&geometry.into());
    let json = serde_json::to_string_pretty(&collection)?;
    fs::write(path.as_ref(), json)?;

    tracing::info!("wrote GeoJSON to {}", path.as_ref().display());
    Ok(())
}
