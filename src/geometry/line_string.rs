use crate::params::DirectionPair;
use crate::{Error, Result};

pub use geo::LineString;
use geo::{Coord, Vector2DOps};

pub trait MapLineString {
    fn arc_length(&self) -> f64;
    fn arc_length_midpoint(&self) -> Option<Coord>;
    fn direction_pair(&self, pair: DirectionPair) -> Result<(Coord, Coord)>;
}

impl MapLineString for LineString {
    fn arc_length(&self) -> f64 {
        self.lines().map(|l| l.delta().magnitude()).sum()
    }

    /// The point halfway along the line measured by length,
    /// not the average of the vertices. None for empty or non-finite lines
    fn arc_length_midpoint(&self) -> Option<Coord> {
        let first = *self.0.first()?;

        let total = self.arc_length();
        if !total.is_finite() {
            return None;
        }
        if total == 0. {
            return Some(first);
        }

        let mut remaining = total / 2.;
        for line in self.lines() {
            let length = line.delta().magnitude();
            if length > 0. && remaining <= length {
                return Some(line.start + line.delta() * (remaining / length));
            }
            remaining -= length;
        }

        // only reachable through rounding in the running sum
        self.0.last().copied()
    }

    fn direction_pair(&self, pair: DirectionPair) -> Result<(Coord, Coord)> {
        let n = self.0.len();
        if n < 2 {
            return Err(Error::TooFewPoints(n));
        }

        Ok(match pair {
            DirectionPair::Tail => (self.0[n - 2], self.0[n - 1]),
            DirectionPair::Head => (self.0[0], self.0[1]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_arc_length() {
        let line = LineString::from(vec![(0., 0.), (3., 4.), (3., 10.)]);

        assert_eq!(line.arc_length(), 11.);
    }

    #[test]
    fn midpoint_follows_length_not_vertices() {
        // the vertex average would be (4/3, 0)
        let line = LineString::from(vec![(0., 0.), (1., 0.), (3., 0.)]);

        assert_eq!(line.arc_length_midpoint(), Some(coord! { x: 1.5, y: 0. }));
    }

    #[test]
    fn midpoint_on_bend() {
        let line = LineString::from(vec![(0., 0.), (0., 2.), (4., 2.)]);

        assert_eq!(line.arc_length_midpoint(), Some(coord! { x: 1., y: 2. }));
    }

    #[test]
    fn midpoint_of_degenerate_lines() {
        let empty = LineString::new(vec![]);
        let point_like = LineString::from(vec![(2., 2.), (2., 2.)]);

        assert_eq!(empty.arc_length_midpoint(), None);
        assert_eq!(point_like.arc_length_midpoint(), Some(coord! { x: 2., y: 2. }));
    }

    #[test]
    fn direction_pair_tail_and_head() -> Result<()> {
        let line = LineString::from(vec![(0., 0.), (1., 0.), (1., 1.)]);

        assert_eq!(
            line.direction_pair(DirectionPair::Tail)?,
            (coord! { x: 1., y: 0. }, coord! { x: 1., y: 1. })
        );
        assert_eq!(
            line.direction_pair(DirectionPair::Head)?,
            (coord! { x: 0., y: 0. }, coord! { x: 1., y: 0. })
        );
        Ok(())
    }

    #[test]
    fn direction_pair_needs_two_points() {
        let line = LineString::from(vec![(0., 0.)]);

        assert!(matches!(
            line.direction_pair(DirectionPair::Tail),
            Err(Error::TooFewPoints(1))
        ));
    }
}
