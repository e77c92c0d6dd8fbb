//! Projected coordinate systems
//!
//! PROJ is consumed as an opaque capability: [`ProjectionSpec`] validates a
//! definition, [`ProjTransform`] builds the two pipelines to and from
//! EPSG:4326, and [`ProjectionTransform`] is the seam generators depend on.

pub mod spec;
pub mod transformer;

pub use spec::{ProjectionBuilder, ProjectionSpec, SpecKind, LOCAL_SPHERE_RADIUS};
pub use transformer::{ProjTransform, ProjectionTransform, TransformOutcome, GEOGRAPHIC_CRS};
