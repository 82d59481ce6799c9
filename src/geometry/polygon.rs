use super::Intersection;
use crate::consts::CLIP_EPSILON;

pub use geo::Polygon;
use geo::{Area, Coord, Intersects, Line, LineString, Point, Vector2DOps};

pub trait MapPolygon {
    fn is_degenerate(&self) -> bool;
    fn clip_line(&self, line: &Line) -> Intersection;
}

impl MapPolygon for Polygon {
    fn is_degenerate(&self) -> bool {
        let exterior = self.exterior();
        exterior.0.len() < 4
            || exterior.0.iter().any(|c| !c.x.is_finite() || !c.y.is_finite())
            || self.unsigned_area() == 0.
    }

    /// Parts of `line` inside the polygon or on its boundary, ordered and
    /// oriented in the direction of `line`. A line only touching the boundary
    /// gives the first point of contact.
    fn clip_line(&self, line: &Line) -> Intersection {
        let length = line.delta().magnitude();
        if length == 0. || !length.is_finite() {
            return Intersection::None;
        }
        let direction = line.delta() / length;
        let half_length = length / 2.;

        // crossings are computed around the midpoint of the line, as the
        // far ends of an extrapolated line are ~1e10 away from the polygon
        let origin = (line.start + line.end) / 2.;

        let extent = self
            .exterior()
            .0
            .iter()
            .map(|c| (*c - origin).magnitude())
            .fold(1., f64::max);
        let epsilon = CLIP_EPSILON * extent;

        let mut breaks = vec![];
        for ring in std::iter::once(self.exterior()).chain(self.interiors()) {
            ring_crossings(ring, origin, direction, epsilon, &mut breaks);
        }
        breaks.retain(|t| t.abs() <= half_length);
        let contact = breaks.iter().copied().reduce(f64::min);

        breaks.extend([-half_length, half_length]);
        breaks.sort_by(f64::total_cmp);
        breaks.dedup_by(|a, b| (*a - *b).abs() <= epsilon);

        let mut parts: Vec<(f64, f64)> = vec![];
        for window in breaks.windows(2) {
            let (t0, t1) = (window[0], window[1]);
            if t1 - t0 <= epsilon {
                continue;
            }

            let middle = origin + direction * ((t0 + t1) / 2.);
            if !self.intersects(&Point::from(middle)) {
                continue;
            }

            // neighbouring inside intervals are split at a vertex on the line
            match parts.last_mut() {
                Some(last) if last.1 == t0 => last.1 = t1,
                _ => parts.push((t0, t1)),
            }
        }

        if parts.is_empty() {
            return match contact {
                Some(t) => Intersection::Point(origin + direction * t),
                None => Intersection::None,
            };
        }

        Intersection::from_parts(
            parts
                .into_iter()
                .map(|(t0, t1)| {
                    LineString::new(vec![
                        origin + direction * t0,
                        origin + direction * t1,
                    ])
                })
                .collect(),
        )
    }
}

/// Pushes the line parameter of every point where `ring` meets the line
/// through `origin` along the unit vector `direction`
fn ring_crossings(
    ring: &LineString,
    origin: Coord,
    direction: Coord,
    epsilon: f64,
    breaks: &mut Vec<f64>,
) {
    for edge in ring.lines() {
        let start = edge.start - origin;
        let end = edge.end - origin;

        // signed distances from the line
        let d_start = direction.wedge_product(start);
        let d_end = direction.wedge_product(end);

        let start_on_line = d_start.abs() <= epsilon;
        let end_on_line = d_end.abs() <= epsilon;

        if start_on_line {
            breaks.push(direction.dot_product(start));
        }
        if end_on_line {
            breaks.push(direction.dot_product(end));
        }
        if !start_on_line && !end_on_line && d_start.signum() != d_end.signum() {
            let t_start = direction.dot_product(start);
            let t_end = direction.dot_product(end);
            breaks.push(t_start + (t_end - t_start) * d_start / (d_start - d_end));
        }
    }
}
