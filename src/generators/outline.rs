//! Outlines of projected map extents in geographic coordinates

use crate::error::Result;
use crate::extent::Extent;
use crate::generators::cartesian::DEFAULT_DENSIFY_SEGMENTS;
use crate::interpolate::float_range;
use crate::projection::{ProjTransform, ProjectionSpec, ProjectionTransform, TransformOutcome};
use geo::Coord;

/// Densified outline of `extent`, unprojected to longitude/latitude
///
/// The rectangle is walked west (up), north (right), east (down), south
/// (left), each edge with `segments + 1` points, all in the projection's own
/// coordinates. Points the projection cannot invert are dropped and listed in
/// [`TransformOutcome::dropped`]. Poles or the antimeridian inside the extent
/// produce lines that jump across the map.
pub fn projection_extent_outline(
    transform: &impl ProjectionTransform,
    extent: &Extent,
    segments: usize,
) -> TransformOutcome {
    let Extent { x1, y1, x2, y2 } = *extent;

    let mut outline: Vec<Coord> = Vec::with_capacity(4 * (segments + 1));
    outline.extend(float_range(y1, y2, segments).map(|y| Coord { x: x1, y }));
    outline.extend(float_range(x1, x2, segments).map(|x| Coord { x, y: y2 }));
    outline.extend(float_range(y2, y1, segments).map(|y| Coord { x: x2, y }));
    outline.extend(float_range(x2, x1, segments).map(|x| Coord { x, y: y1 }));

    let outcome = transform.inverse_all(&outline);
    tracing::debug!(
        "extent outline kept {} of {} points",
        outcome.coords.len(),
        outline.len()
    );
    outcome
}

/// [`projection_extent_outline`] for a projection definition, at the default density
pub fn convert_projection_extent(spec: &ProjectionSpec, extent: &Extent) -> Result<TransformOutcome> {
    let transform = ProjTransform::new(spec)?;
    Ok(projection_extent_outline(&transform, extent, DEFAULT_DENSIFY_SEGMENTS))
}
