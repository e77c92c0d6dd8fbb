//! Geodesic problems on a chosen reference body
//!
//! The numerical work is delegated to geographiclib; this module only picks
//! the ellipsoid, checks values at the boundary, and exposes the operations
//! the generators need through [`GeodesicSolver`].

pub mod ellipsoid;
pub mod solver;

pub use ellipsoid::Ellipsoid;
pub use solver::{great_circle_distance, EllipsoidalSolver, GeodesicSolver, Inverse};
