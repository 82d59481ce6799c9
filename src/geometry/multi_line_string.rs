use super::MapLineString;
use crate::{Error, Result};

pub use geo::MultiLineString;
use geo::{Coord, LineString, Vector2DOps};

pub trait MapMultiLineString {
    fn nearest_part(self, reference: Coord) -> Result<LineString>;
}

impl MapMultiLineString for MultiLineString {
    /// Takes the part whose length-wise midpoint is closest to `reference`,
    /// the first one wins ties
    fn nearest_part(mut self, reference: Coord) -> Result<LineString> {
        let mut nearest: Option<(usize, f64)> = None;

        for (i, part) in self.0.iter().enumerate() {
            let Some(midpoint) = part.arc_length_midpoint() else {
                continue;
            };
            let dist = (midpoint - reference).magnitude();
            if dist.is_nan() {
                continue;
            }
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((i, dist));
            }
        }

        let (index, _) = nearest.ok_or(Error::NoCandidates)?;
        Ok(self.0.swap_remove(index))
    }
}
