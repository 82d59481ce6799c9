use super::{Intersection, MapLineString, MapMultiLineString, MapPolygon};
use crate::{Error, Result};

use geo::{Intersects, Line, LineString, Polygon};

/// Trims the extrapolated line to the part of `polygon` belonging to the
/// `original` cross-section.
///
/// Returns the extrapolated line unchanged if it misses the polygon. If the line
/// enters the polygon several times, the part with its midpoint closest to the
/// midpoint of `original` is chosen.
pub fn resolve(original: &LineString, extrapolated: &Line, polygon: &Polygon) -> Result<LineString> {
    let reference = original
        .arc_length_midpoint()
        .ok_or(Error::InvalidSegment)?;

    if !polygon.intersects(extrapolated) {
        return Ok(LineString::new(vec![extrapolated.start, extrapolated.end]));
    }

    let intersection = polygon.clip_line(extrapolated);
    log::debug!("Extended line meets the outline as a {}", intersection.kind());

    match intersection {
        Intersection::Single(line) => Ok(line),
        Intersection::Multi(parts) => parts.nearest_part(reference),
        other => Err(Error::UnsupportedIntersection(other.kind())),
    }
}
