use crate::consts::EXTRAPOLATION_RATIO;
use crate::{Error, Result};

pub use geo::Line;
use geo::{Coord, Vector2DOps};

/// Creates a line through `p1` and `p2` extended `EXTRAPOLATION_RATIO` times
/// the length of the segment in both directions.
pub fn extrapolate(p1: Coord, p2: Coord) -> Result<Line> {
    extrapolate_with_ratio(p1, p2, EXTRAPOLATION_RATIO)
}

/// The returned line runs from `p2 + ratio * (p1 - p2)` to `p1 + ratio * (p2 - p1)`,
/// so it keeps the p1 -> p2 direction and shares its midpoint with the segment.
pub fn extrapolate_with_ratio(p1: Coord, p2: Coord, ratio: f64) -> Result<Line> {
    check_ratio(ratio)?;

    let finite = [p1.x, p1.y, p2.x, p2.y].iter().all(|v| v.is_finite());
    let delta = p2 - p1;
    if p1 == p2 || !finite || !delta.magnitude().is_finite() {
        return Err(Error::InvalidSegment);
    }

    let b = p1 + delta * ratio;
    let b2 = p2 - delta * ratio;

    Ok(Line::new(b2, b))
}

/// Ratios must be finite and larger than 1 for the line to contain the segment
pub fn check_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio <= 1. {
        return Err(Error::InvalidRatio(ratio));
    }
    Ok(())
}
