use crate::geometry::{extrapolate_with_ratio, resolve, MapLineString};
use crate::glacier::{GlacierGroup, GlacierId};
use crate::params::ExtendParams;
use crate::{Error, Result};

use geo::{LineString, Polygon};

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedLine {
    pub glacier_id: GlacierId,
    // position of the source cross-section in its layer
    pub index: usize,
    pub line: LineString,
}

#[derive(Debug)]
pub struct Failure {
    // None when the id of the input feature could not be read
    pub glacier_id: Option<GlacierId>,
    // None when the whole glacier or an outline feature failed
    pub index: Option<usize>,
    pub error: Error,
}

impl Failure {
    pub fn glacier(glacier_id: GlacierId, error: Error) -> Failure {
        Failure {
            glacier_id: Some(glacier_id),
            index: None,
            error,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.glacier_id {
            Some(id) => write!(f, "Glacier {id}")?,
            None => f.write_str("Unknown glacier")?,
        }
        if let Some(index) = self.index {
            write!(f, ", cross-section {index}")?;
        }
        write!(f, ": {}", self.error)
    }
}

#[derive(Debug, Default)]
pub struct ExtensionReport {
    /// in glacier order, then cross-section order
    pub extended: Vec<ExtendedLine>,
    pub failures: Vec<Failure>,
}

/// Extends a single cross-section to the outline
pub fn extend_cross_section(
    cross_section: &LineString,
    outline: &Polygon,
    params: &ExtendParams,
) -> Result<LineString> {
    let (p1, p2) = cross_section.direction_pair(params.direction)?;
    let long_line = extrapolate_with_ratio(p1, p2, params.ratio)?;

    resolve(cross_section, &long_line, outline)
}

pub fn extend_cross_sections(groups: &[GlacierGroup], params: &ExtendParams) -> ExtensionReport {
    let mut report = ExtensionReport::default();

    for group in groups {
        for cross_section in &group.cross_sections {
            match extend_cross_section(&cross_section.line, &group.outline, params) {
                Ok(line) => report.extended.push(ExtendedLine {
                    glacier_id: group.id.clone(),
                    index: cross_section.index,
                    line,
                }),
                Err(error) => {
                    log::warn!(
                        "Could not extend cross-section {} of glacier {}: {error}",
                        cross_section.index,
                        group.id
                    );
                    report.failures.push(Failure {
                        glacier_id: Some(group.id.clone()),
                        index: Some(cross_section.index),
                        error,
                    });
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glacier::CrossSection;
    use crate::params::DirectionPair;
    use approx::assert_relative_eq;
    use geo::polygon;

    fn square_at(x0: f64) -> Polygon {
        polygon![
            (x: x0, y: 0.),
            (x: x0 + 10., y: 0.),
            (x: x0 + 10., y: 10.),
            (x: x0, y: 10.),
        ]
    }

    fn vertical(x: f64, index: usize) -> CrossSection {
        CrossSection {
            index,
            line: LineString::from(vec![(x, 4.), (x, 6.)]),
        }
    }

    #[test]
    fn output_keeps_traversal_order() {
        let groups = vec![
            GlacierGroup {
                id: GlacierId::new("b"),
                outline: square_at(100.),
                cross_sections: vec![vertical(102., 3), vertical(105., 0)],
            },
            GlacierGroup {
                id: GlacierId::new("a"),
                outline: square_at(0.),
                cross_sections: vec![vertical(1., 2), vertical(7., 4), vertical(9., 1)],
            },
        ];

        let report = extend_cross_sections(&groups, &ExtendParams::default());

        assert!(report.failures.is_empty());
        assert_eq!(report.extended.len(), 5);

        let order: Vec<usize> = report.extended.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![3, 0, 2, 4, 1]);

        let expected_x = [102., 105., 1., 7., 9.];
        for (extended, x) in report.extended.iter().zip(expected_x) {
            assert_relative_eq!(extended.line.0[0].x, x, epsilon = 1e-6);
            assert_relative_eq!(extended.line.0[0].y, 0., epsilon = 1e-6);
            assert_relative_eq!(extended.line.0[1].y, 10., epsilon = 1e-6);
        }
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let degenerate = CrossSection {
            index: 1,
            line: LineString::from(vec![(3., 3.), (3., 3.)]),
        };
        let groups = vec![GlacierGroup {
            id: GlacierId::new("a"),
            outline: square_at(0.),
            cross_sections: vec![vertical(2., 0), degenerate, vertical(8., 2)],
        }];

        let report = extend_cross_sections(&groups, &ExtendParams::default());

        assert_eq!(report.extended.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, Some(1));
        assert!(matches!(report.failures[0].error, Error::InvalidSegment));
    }

    #[test]
    fn head_pair_sets_the_direction() -> Result<()> {
        // bent line: the head runs along x, the tail along y
        let cross_section = LineString::from(vec![(4., 5.), (5., 5.), (5., 6.)]);
        let params = ExtendParams {
            direction: DirectionPair::Head,
            ..Default::default()
        };

        let line = extend_cross_section(&cross_section, &square_at(0.), &params)?;

        assert_relative_eq!(line.0[0].x, 0., epsilon = 1e-6);
        assert_relative_eq!(line.0[0].y, 5., epsilon = 1e-6);
        assert_relative_eq!(line.0[1].x, 10., epsilon = 1e-6);
        assert_relative_eq!(line.0[1].y, 5., epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn failures_name_glacier_and_cross_section() {
        let with_index = Failure {
            glacier_id: Some(GlacierId::new("a")),
            index: Some(3),
            error: Error::InvalidSegment,
        };
        let unknown = Failure {
            glacier_id: None,
            index: Some(1),
            error: Error::NoCandidates,
        };

        assert!(with_index.to_string().starts_with("Glacier a, cross-section 3: "));
        assert!(unknown.to_string().starts_with("Unknown glacier, cross-section 1: "));
    }
}
