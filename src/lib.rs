//! geodesic-shapes - Accurately curved vector geometries for web maps
//!
//! geodesic-shapes builds great-circle paths, geodesic buffers, graticules,
//! tissot indicatrices and projected-extent outlines as `geo` geometries,
//! ready to be drawn over a geographic basemap.
//!
//! # Examples
//!
//! ## Great circle between two cities
//!
//! ```no_run
//! use geo::{Coord, LineString};
//! use geodesic_shapes::{great_circle, EllipsoidalSolver};
//!
//! let solver = EllipsoidalSolver::wgs84();
//! let edinburgh = Coord { x: -3.189, y: 55.953 };
//! let giza = Coord { x: 31.131, y: 29.976 };
//!
//! let path: LineString = great_circle(&solver, edinburgh, giza, 100)?;
//! assert_eq!(path.0.len(), 101);
//! # Ok::<(), geodesic_shapes::Error>(())
//! ```
//!
//! ## Buffer in miles, as a polygon
//!
//! ```no_run
//! use geo::{Coord, Polygon};
//! use geodesic_shapes::{geodesic_point_buffer, units::MI, EllipsoidalSolver};
//!
//! let solver = EllipsoidalSolver::wgs84();
//! let leith = Coord { x: -3.170, y: 55.976 };
//! let ring: Polygon = geodesic_point_buffer(&solver, leith, 1000, 500.0 * MI)?;
//! # Ok::<(), geodesic_shapes::Error>(())
//! ```
//!
//! ## Outline of a projected map canvas
//!
//! ```no_run
//! use geodesic_shapes::{convert_projection_extent, parse_extent, ProjectionSpec};
//!
//! let spec = ProjectionSpec::new("EPSG:27700")?;
//! let extent = parse_extent("-1828313,-1196252 : 2280177,2121200")?;
//! let outline = convert_projection_extent(&spec, &extent)?;
//! println!("kept {} points, dropped {}", outline.coords.len(), outline.dropped.len());
//! # Ok::<(), geodesic_shapes::Error>(())
//! ```

pub mod config;
pub mod degree;
pub mod dump;
pub mod error;
pub mod extent;
pub mod generators;
pub mod geodesic;
pub mod interpolate;
pub mod projection;
pub mod shape;
pub mod units;

pub use config::EngineConfig;
pub use degree::{size_of_degree_at, DegreeSize};
pub use dump::{dump_geometry_to_geojson, geometry_to_feature_collection};
pub use error::{Error, Result};
pub use extent::{parse_extent, Extent};
pub use generators::{
    bounding_box, bounding_box_cartesian, convert_projection_extent, geodesic_point_buffer, graticules,
    great_circle, great_circle_through, great_circle_through_both, line_cartesian, point_buffer,
    projected_point_buffer, projection_extent_outline, square_buffer, square_buffer_geodesic,
    tissot_indicatrix, GeodesicBuffer, Graticule, PointBuffer, ProjectedBuffer, Sweep, TissotGrid,
};
pub use geodesic::{great_circle_distance, Ellipsoid, EllipsoidalSolver, GeodesicSolver, Inverse};
pub use interpolate::{float_range, float_range_by, FloatRange};
pub use projection::{ProjTransform, ProjectionSpec, ProjectionTransform, TransformOutcome};
pub use shape::{FromCoords, ShapeKind};
