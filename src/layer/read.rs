use super::geojson::{to_line_string, to_polygon, Feature, FeatureCollection, Geometry};
use crate::glacier::GlacierId;
use crate::steps::Failure;
use crate::{Error, Result};

use geo::{LineString, Polygon};
use serde_json::Value;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let reader = BufReader::new(File::open(path)?);
    let collection: FeatureCollection = serde_json::from_reader(reader)?;

    if collection.kind != "FeatureCollection" {
        return Err(Error::InvalidLayer {
            path: path.to_path_buf(),
            reason: format!("expected a FeatureCollection, found {}", collection.kind),
        });
    }
    Ok(collection)
}

/// A usable feature of an input layer
#[derive(Clone, Debug)]
pub struct LayerFeature<T> {
    // position in its layer
    pub index: usize,
    pub id: GlacierId,
    pub geometry: T,
}

/// Outline polygons with their glacier id, in layer order. Unusable features
/// become failures without a cross-section index.
pub fn read_outlines(
    path: &Path,
    id_field: &str,
) -> Result<(Vec<LayerFeature<Polygon>>, Vec<Failure>)> {
    let collection = read_feature_collection(path)?;
    let (outlines, failures) = read_features(&collection, id_field, feature_polygon);

    log::info!(
        "Read {} outlines from {}, {} unusable",
        outlines.len(),
        path.display(),
        failures.len()
    );
    let failures = failures
        .into_iter()
        .map(|(_, id, error)| Failure {
            glacier_id: id,
            index: None,
            error,
        })
        .collect();
    Ok((outlines, failures))
}

/// Cross-section lines with their glacier id, in layer order. Unusable
/// features become failures of that cross-section.
pub fn read_cross_sections(
    path: &Path,
    id_field: &str,
) -> Result<(Vec<LayerFeature<LineString>>, Vec<Failure>)> {
    let collection = read_feature_collection(path)?;
    let (cross_sections, failures) = read_features(&collection, id_field, feature_line_string);

    log::info!(
        "Read {} cross-sections from {}, {} unusable",
        cross_sections.len(),
        path.display(),
        failures.len()
    );
    let failures = failures
        .into_iter()
        .map(|(index, id, error)| Failure {
            glacier_id: id,
            index: Some(index),
            error,
        })
        .collect();
    Ok((cross_sections, failures))
}

type FeatureError = (usize, Option<GlacierId>, Error);

fn read_features<T>(
    collection: &FeatureCollection,
    id_field: &str,
    geometry: impl Fn(&Feature, usize) -> Result<T>,
) -> (Vec<LayerFeature<T>>, Vec<FeatureError>) {
    let mut features = vec![];
    let mut failures = vec![];

    for (index, feature) in collection.features.iter().enumerate() {
        let id = match feature_id(feature, index, id_field) {
            Ok(id) => id,
            Err(error) => {
                log::warn!("Skipping feature {index}: {error}");
                failures.push((index, None, error));
                continue;
            }
        };

        match geometry(feature, index) {
            Ok(geometry) => features.push(LayerFeature {
                index,
                id,
                geometry,
            }),
            Err(error) => {
                log::warn!("Skipping feature {index} of glacier {id}: {error}");
                failures.push((index, Some(id), error));
            }
        }
    }

    (features, failures)
}

fn feature_id(feature: &Feature, index: usize, id_field: &str) -> Result<GlacierId> {
    let missing = || Error::MissingProperty {
        index,
        field: id_field.to_string(),
    };

    let value = feature
        .properties
        .as_ref()
        .and_then(|p| p.get(id_field))
        .ok_or_else(missing)?;

    match value {
        Value::String(s) => Ok(GlacierId::new(s.as_str())),
        // 10 and 10.0 must group together
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(GlacierId::numeric(i.to_string())),
            (None, Some(f)) if f.fract() == 0. && f.abs() < i64::MAX as f64 => {
                Ok(GlacierId::numeric((f as i64).to_string()))
            }
            _ => Ok(GlacierId::numeric(n.to_string())),
        },
        _ => Err(missing()),
    }
}

fn feature_polygon(feature: &Feature, index: usize) -> Result<Polygon> {
    let unsupported = |found: &str| Error::UnsupportedGeometry {
        index,
        found: found.to_string(),
        expected: "Polygon",
    };

    let polygon = match &feature.geometry {
        Some(Geometry::Polygon(rings)) => to_polygon(rings),
        Some(Geometry::MultiPolygon(polygons)) if polygons.len() == 1 => to_polygon(&polygons[0]),
        Some(Geometry::MultiPolygon(polygons)) => {
            return Err(unsupported(&format!(
                "MultiPolygon with {} parts",
                polygons.len()
            )))
        }
        Some(other) => return Err(unsupported(other.type_name())),
        None => return Err(unsupported("null")),
    };

    polygon.ok_or_else(|| unsupported("Polygon with malformed coordinates"))
}

fn feature_line_string(feature: &Feature, index: usize) -> Result<LineString> {
    let unsupported = |found: &str| Error::UnsupportedGeometry {
        index,
        found: found.to_string(),
        expected: "LineString",
    };

    let line = match &feature.geometry {
        Some(Geometry::LineString(positions)) => to_line_string(positions),
        Some(Geometry::MultiLineString(lines)) if lines.len() == 1 => to_line_string(&lines[0]),
        Some(Geometry::MultiLineString(lines)) => {
            return Err(unsupported(&format!(
                "MultiLineString with {} parts",
                lines.len()
            )))
        }
        Some(other) => return Err(unsupported(other.type_name())),
        None => return Err(unsupported("null")),
    };

    line.ok_or_else(|| unsupported("LineString with malformed coordinates"))
}
