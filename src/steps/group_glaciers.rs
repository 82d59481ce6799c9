use crate::geometry::MapPolygon;
use crate::glacier::{CrossSection, GlacierGroup, GlacierId};
use crate::layer::LayerFeature;
use crate::Error;

use super::Failure;

use geo::{LineString, Polygon};

use std::collections::HashMap;

/// Pairs every glacier id with its single outline and its cross-sections.
///
/// Groups follow the order of the outline layer and cross-sections keep their
/// layer order within a group, each with its index in that layer. Ids with zero
/// or several outlines, or with a degenerate outline, become failures instead
/// of groups.
pub fn group_glaciers(
    outlines: Vec<LayerFeature<Polygon>>,
    cross_sections: Vec<LayerFeature<LineString>>,
) -> (Vec<GlacierGroup>, Vec<Failure>) {
    let mut outline_order: Vec<GlacierId> = vec![];
    let mut outlines_by_id: HashMap<GlacierId, Vec<Polygon>> = HashMap::new();
    for outline in outlines {
        let entry = outlines_by_id.entry(outline.id.clone()).or_default();
        if entry.is_empty() {
            outline_order.push(outline.id);
        }
        entry.push(outline.geometry);
    }

    let mut orphan_order: Vec<GlacierId> = vec![];
    let mut sections_by_id: HashMap<GlacierId, Vec<CrossSection>> = HashMap::new();
    for LayerFeature {
        index,
        id,
        geometry: line,
    } in cross_sections
    {
        if !outlines_by_id.contains_key(&id) && !sections_by_id.contains_key(&id) {
            orphan_order.push(id.clone());
        }
        sections_by_id
            .entry(id)
            .or_default()
            .push(CrossSection { index, line });
    }

    let mut groups = Vec::with_capacity(outline_order.len());
    let mut failures = vec![];

    for id in outline_order {
        let mut outlines = outlines_by_id.remove(&id).unwrap_or_default();
        let sections = sections_by_id.remove(&id).unwrap_or_default();

        if outlines.len() != 1 {
            log::warn!(
                "Glacier {id} has {} outlines, skipping its {} cross-sections",
                outlines.len(),
                sections.len()
            );
            failures.push(Failure::glacier(
                id.clone(),
                Error::Grouping {
                    id,
                    found: outlines.len(),
                },
            ));
            continue;
        }

        let outline = outlines.swap_remove(0);
        if outline.is_degenerate() {
            log::warn!(
                "Glacier {id} has a degenerate outline, skipping its {} cross-sections",
                sections.len()
            );
            failures.push(Failure::glacier(id, Error::DegeneratePolygon));
            continue;
        }

        if sections.is_empty() {
            log::debug!("Glacier {id} has no cross-sections");
        }

        groups.push(GlacierGroup {
            id,
            outline,
            cross_sections: sections,
        });
    }

    for id in orphan_order {
        let count = sections_by_id.get(&id).map_or(0, Vec::len);
        log::warn!("No outline for glacier {id}, skipping its {count} cross-sections");
        failures.push(Failure::glacier(id.clone(), Error::Grouping { id, found: 0 }));
    }

    (groups, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(size: f64) -> Polygon {
        polygon![
            (x: 0., y: 0.),
            (x: size, y: 0.),
            (x: size, y: size),
            (x: 0., y: size),
        ]
    }

    fn line(x: f64) -> LineString {
        LineString::from(vec![(x, 1.), (x, 2.)])
    }

    fn id(s: &str) -> GlacierId {
        GlacierId::new(s)
    }

    // features numbered in the order given
    fn layer<T>(features: Vec<(&str, T)>) -> Vec<LayerFeature<T>> {
        features
            .into_iter()
            .enumerate()
            .map(|(index, (s, geometry))| LayerFeature {
                index,
                id: id(s),
                geometry,
            })
            .collect()
    }

    #[test]
    fn groups_follow_outline_order() {
        let outlines = layer(vec![("b", square(10.)), ("a", square(20.))]);
        let cross_sections = layer(vec![("a", line(1.)), ("b", line(2.)), ("a", line(3.))]);

        let (groups, failures) = group_glaciers(outlines, cross_sections);

        assert!(failures.is_empty());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, id("b"));
        assert_eq!(groups[1].id, id("a"));

        let a_indices: Vec<usize> = groups[1].cross_sections.iter().map(|c| c.index).collect();
        assert_eq!(a_indices, vec![0, 2]);
        assert_eq!(groups[1].cross_sections[1].line, line(3.));
    }

    #[test]
    fn duplicate_outlines_are_a_grouping_error() {
        let outlines = layer(vec![("a", square(10.)), ("b", square(10.)), ("a", square(20.))]);
        let cross_sections = layer(vec![("a", line(1.)), ("b", line(2.))]);

        let (groups, failures) = group_glaciers(outlines, cross_sections);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, id("b"));
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0].error,
            Error::Grouping { id, found: 2 } if id.as_str() == "a"
        ));
    }

    #[test]
    fn cross_sections_without_outline_are_reported() {
        let outlines = layer(vec![("a", square(10.))]);
        let cross_sections = layer(vec![("x", line(1.)), ("a", line(2.)), ("x", line(3.))]);

        let (groups, failures) = group_glaciers(outlines, cross_sections);

        assert_eq!(groups.len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].glacier_id, Some(id("x")));
        assert!(failures[0].index.is_none());
        assert!(matches!(
            failures[0].error,
            Error::Grouping { found: 0, .. }
        ));
    }

    #[test]
    fn degenerate_outline_is_reported() {
        let flat = polygon![(x: 0., y: 0.), (x: 1., y: 1.), (x: 2., y: 2.)];

        let (groups, failures) =
            group_glaciers(layer(vec![("a", flat)]), layer(vec![("a", line(1.))]));

        assert!(groups.is_empty());
        assert!(matches!(failures[0].error, Error::DegeneratePolygon));
    }

    #[test]
    fn layer_indices_survive_skipped_features() {
        let outlines = layer(vec![("a", square(10.))]);
        let cross_sections = vec![
            LayerFeature {
                index: 0,
                id: id("a"),
                geometry: line(1.),
            },
            LayerFeature {
                index: 2,
                id: id("a"),
                geometry: line(3.),
            },
        ];

        let (groups, _) = group_glaciers(outlines, cross_sections);

        let indices: Vec<usize> = groups[0].cross_sections.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
