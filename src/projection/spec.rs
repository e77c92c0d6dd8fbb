use crate::error::{Error, Result};
use geo::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius of the sphere used for local equidistant buffers
pub const LOCAL_SPHERE_RADIUS: f64 = 6_371_000.0;

/// How a projection definition was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `+proj=... +param=...`
    Proj4,
    /// `AUTHORITY:CODE`, e.g. `EPSG:27700`
    Authority,
    /// Well-known text
    Wkt,
}

/// Validated definition of a planar coordinate reference system
///
/// The definition is opaque to the crate; validation only makes sure PROJ
/// has something it can interpret as a CRS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectionSpec {
    definition: String,
    kind: SpecKind,
}

impl ProjectionSpec {
    /// Validates a PROJ string, authority code or WKT definition
    ///
    /// A lone `+init=epsg:NNNN` is rewritten to `EPSG:NNNN`.
    pub fn new(definition: &str) -> Result<Self> {
        let trimmed = definition.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSpec("Projection definition is empty".to_string()));
        }

        if let Some(code) = init_code(trimmed) {
            return Ok(Self {
                definition: code,
                kind: SpecKind::Authority,
            });
        }

        let kind = if trimmed.starts_with('+') {
            if !trimmed.contains("+proj=") {
                return Err(Error::InvalidSpec(format!(
                    "PROJ string has no +proj= parameter: {}",
                    trimmed
                )));
            }
            SpecKind::Proj4
        } else if trimmed.contains('[') {
            SpecKind::Wkt
        } else if is_authority_code(trimmed) {
            SpecKind::Authority
        } else {
            return Err(Error::InvalidSpec(format!(
                "Unrecognised projection definition: {}",
                trimmed
            )));
        };

        Ok(Self {
            definition: trimmed.to_string(),
            kind,
        })
    }

    /// Azimuthal equidistant projection on a sphere, centered on `center`
    pub fn azimuthal_equidistant(center: Coord) -> Result<Self> {
        ProjectionBuilder::new()
            .projection_type("aeqd")
            .latitude_of_origin(center.y)
            .central_meridian(center.x)
            .false_easting(0.0)
            .false_northing(0.0)
            .parameter("a", &LOCAL_SPHERE_RADIUS.to_string())
            .parameter("b", &LOCAL_SPHERE_RADIUS.to_string())
            .units("m")
            .build()
    }

    /// Returns the definition as given (after trimming)
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns how the definition was written
    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    /// Definition in the form PROJ accepts as a CRS for crs-to-crs pipelines
    pub fn crs_definition(&self) -> String {
        match self.kind {
            SpecKind::Proj4 if !self.definition.contains("+type=crs") => {
                format!("{} +type=crs", self.definition)
            }
            _ => self.definition.clone(),
        }
    }
}

impl fmt::Display for ProjectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

impl FromStr for ProjectionSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectionSpec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<ProjectionSpec> for String {
    fn from(value: ProjectionSpec) -> Self {
        value.definition
    }
}

fn init_code(definition: &str) -> Option<String> {
    let mut tokens = definition.split_whitespace();
    let code = tokens.next()?.strip_prefix("+init=")?;
    if tokens.next().is_some() || !is_authority_code(code) {
        return None;
    }
    Some(code.to_ascii_uppercase())
}

fn is_authority_code(definition: &str) -> bool {
    match definition.split_once(':') {
        Some((authority, code)) => {
            !authority.is_empty()
                && authority.chars().all(|c| c.is_ascii_alphabetic())
                && !code.is_empty()
                && code.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}

/// Builder for PROJ string definitions
pub struct ProjectionBuilder {
    proj_type: Option<String>,
    ellipsoid: Option<String>,
    datum: Option<String>,
    parameters: Vec<(String, String)>,
}

impl ProjectionBuilder {
    /// Creates a new projection builder
    pub fn new() -> Self {
        Self {
            proj_type: None,
            ellipsoid: None,
            datum: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the projection type (e.g., "aeqd", "moll", "tmerc")
    pub fn projection_type(mut self, proj_type: &str) -> Self {
        self.proj_type = Some(proj_type.to_string());
        self
    }

    /// Sets the ellipsoid (e.g., "WGS84", "sphere")
    pub fn ellipsoid(mut self, ellipsoid: &str) -> Self {
        self.ellipsoid = Some(ellipsoid.to_string());
        self
    }

    /// Sets the datum (e.g., "WGS84")
    pub fn datum(mut self, datum: &str) -> Self {
        self.datum = Some(datum.to_string());
        self
    }

    /// Adds a custom parameter; an empty value emits a bare flag
    pub fn parameter(mut self, key: &str, value: &str) -> Self {
        self.parameters.push((key.to_string(), value.to_string()));
        self
    }

    /// Sets the latitude of origin
    pub fn latitude_of_origin(self, lat: f64) -> Self {
        self.parameter("lat_0", &lat.to_string())
    }

    /// Sets the central meridian
    pub fn central_meridian(self, lon: f64) -> Self {
        self.parameter("lon_0", &lon.to_string())
    }

    /// Sets the false easting
    pub fn false_easting(self, x: f64) -> Self {
        self.parameter("x_0", &x.to_string())
    }

    /// Sets the false northing
    pub fn false_northing(self, y: f64) -> Self {
        self.parameter("y_0", &y.to_string())
    }

    /// Sets the units (e.g., "m", "ft")
    pub fn units(self, units: &str) -> Self {
        self.parameter("units", units)
    }

    /// Builds the validated projection spec
    pub fn build(self) -> Result<ProjectionSpec> {
        let proj_type = self
            .proj_type
            .ok_or_else(|| Error::InvalidSpec("Projection type is required".to_string()))?;

        let mut parts = vec![format!("+proj={}", proj_type)];

        if let Some(ellipsoid) = self.ellipsoid {
            parts.push(format!("+ellps={}", ellipsoid));
        }

        if let Some(datum) = self.datum {
            parts.push(format!("+datum={}", datum));
        }

        for (key, value) in self.parameters {
            if value.is_empty() {
                parts.push(format!("+{}", key));
            } else {
                parts.push(format!("+{}={}", key, value));
            }
        }
        parts.push("+no_defs".to_string());

        ProjectionSpec::new(&parts.join(" "))
    }
}

impl Default for ProjectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proj4_spec() {
        let spec = ProjectionSpec::new(" +proj=moll +lon_0=0 +datum=WGS84 +units=m ").unwrap();
        assert_eq!(spec.kind(), SpecKind::Proj4);
        assert_eq!(spec.definition(), "+proj=moll +lon_0=0 +datum=WGS84 +units=m");
        assert!(spec.crs_definition().ends_with("+type=crs"));
    }

    #[test]
    fn test_authority_spec() {
        let spec: ProjectionSpec = "EPSG:27700".parse().unwrap();
        assert_eq!(spec.kind(), SpecKind::Authority);
        assert_eq!(spec.crs_definition(), "EPSG:27700");
    }

    #[test]
    fn test_init_is_rewritten() {
        let spec = ProjectionSpec::new("+init=epsg:27700").unwrap();
        assert_eq!(spec.definition(), "EPSG:27700");
        assert_eq!(spec.kind(), SpecKind::Authority);
    }

    #[test]
    fn test_wkt_spec() {
        let wkt = r#"PROJCS["WGS 84 / Pseudo-Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]]],PROJECTION["Mercator_1SP"],UNIT["metre",1]]"#;
        let spec = ProjectionSpec::new(wkt).unwrap();
        assert_eq!(spec.kind(), SpecKind::Wkt);
        assert_eq!(spec.crs_definition(), wkt);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(ProjectionSpec::new("").is_err());
        assert!(ProjectionSpec::new("mollweide please").is_err());
        assert!(ProjectionSpec::new("+lon_0=0 +units=m").is_err());
    }

    #[test]
    fn test_builder_no_type() {
        let result = ProjectionBuilder::new().build();
        assert!(matches!(result, Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn test_builder_flags_and_values() {
        let spec = ProjectionBuilder::new()
            .projection_type("utm")
            .parameter("zone", "33")
            .parameter("south", "")
            .ellipsoid("WGS84")
            .build()
            .unwrap();

        assert!(spec.definition().contains("+proj=utm"));
        assert!(spec.definition().contains("+zone=33"));
        assert!(spec.definition().contains("+south "));
    }

    #[test]
    fn test_builder_datum() {
        let spec = ProjectionBuilder::new()
            .projection_type("tmerc")
            .datum("WGS84")
            .central_meridian(9.0)
            .build()
            .unwrap();

        assert_eq!(spec.definition(), "+proj=tmerc +datum=WGS84 +lon_0=9 +no_defs");
    }

    #[test]
    fn test_azimuthal_equidistant() {
        let spec = ProjectionSpec::azimuthal_equidistant(Coord { x: -3.17, y: 55.97 }).unwrap();
        assert!(spec.definition().contains("+proj=aeqd"));
        assert!(spec.definition().contains("+lat_0=55.97"));
        assert!(spec.definition().contains("+lon_0=-3.17"));
        assert!(spec.definition().contains("+a=6371000"));
    }
}
