//! Geometry generators
//!
//! Every generator is a pure function of its arguments. Solvers and
//! transforms are passed in per call; nothing is cached between calls.

pub mod buffer;
pub mod cartesian;
pub mod great_circle;
pub mod outline;
pub mod square;
pub mod tissot;

pub use buffer::{geodesic_point_buffer, point_buffer, projected_point_buffer, GeodesicBuffer, PointBuffer, ProjectedBuffer};
pub use cartesian::{bounding_box_cartesian, graticules, line_cartesian, Graticule, DEFAULT_DENSIFY_SEGMENTS};
pub use great_circle::{
    bounding_box, great_circle, great_circle_through, great_circle_through_both, Sweep, EARTH_CIRCUMFERENCE_M,
    SWEEP_STEP_M,
};
pub use outline::{convert_projection_extent, projection_extent_outline};
pub use square::{square_buffer, square_buffer_geodesic, square_extents};
pub use tissot::{tissot_indicatrix, TissotGrid};
