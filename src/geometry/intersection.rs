use std::fmt;

use geo::{Coord, LineString, MultiLineString};

/// Result of clipping a straight line by a polygon area
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    None,
    /// the line only touches the boundary
    Point(Coord),
    Single(LineString),
    Multi(MultiLineString),
}

impl Intersection {
    pub fn from_parts(mut parts: Vec<LineString>) -> Intersection {
        match parts.len() {
            0 => Intersection::None,
            1 => Intersection::Single(parts.swap_remove(0)),
            _ => Intersection::Multi(MultiLineString::new(parts)),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Intersection::None => GeometryKind::Empty,
            Intersection::Point(_) => GeometryKind::Point,
            Intersection::Single(_) => GeometryKind::Line,
            Intersection::Multi(_) => GeometryKind::MultiLine,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    Empty,
    Point,
    Line,
    MultiLine,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Empty => "empty geometry",
            GeometryKind::Point => "point",
            GeometryKind::Line => "line",
            GeometryKind::MultiLine => "multi-line",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_are_classified_by_count() {
        let a = LineString::from(vec![(0., 0.), (1., 0.)]);
        let b = LineString::from(vec![(2., 0.), (3., 0.)]);

        assert_eq!(Intersection::from_parts(vec![]), Intersection::None);
        assert_eq!(
            Intersection::from_parts(vec![a.clone()]),
            Intersection::Single(a.clone())
        );
        assert_eq!(
            Intersection::from_parts(vec![a.clone(), b.clone()]).kind(),
            GeometryKind::MultiLine
        );
    }

    #[test]
    fn kinds_name_the_geometry() {
        let touch = Intersection::Point(Coord { x: 1., y: 2. });
        let line = Intersection::Single(LineString::from(vec![(0., 0.), (1., 0.)]));

        assert_eq!(Intersection::None.kind(), GeometryKind::Empty);
        assert_eq!(touch.kind(), GeometryKind::Point);
        assert_eq!(line.kind(), GeometryKind::Line);
        assert_eq!(touch.kind().to_string(), "point");
    }
}
