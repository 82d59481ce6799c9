use super::geojson::{Feature, FeatureCollection, Geometry, NamedCrs};
use crate::steps::ExtendedLine;
use crate::{Error, Result};

use serde_json::{Map, Value};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the extended lines in the given order as a GeoJSON layer tagged with
/// `epsg`, and the WKT of that CRS as a .prj file next to it
pub fn write_extended_lines(
    path: &Path,
    lines: &[ExtendedLine],
    id_field: &str,
    epsg: u16,
) -> Result<()> {
    let crs = crs_definitions::from_code(epsg).ok_or(Error::UnknownCrs(epsg))?;

    let features = lines
        .iter()
        .map(|extended| {
            let mut properties = Map::new();
            properties.insert(id_field.to_string(), extended.glacier_id.to_value());
            properties.insert("cs_index".to_string(), Value::from(extended.index));

            Feature {
                kind: "Feature".to_string(),
                properties: Some(properties),
                geometry: Some(Geometry::from_line_string(&extended.line)),
            }
        })
        .collect();

    let collection = FeatureCollection {
        kind: "FeatureCollection".to_string(),
        crs: Some(NamedCrs::from_epsg(epsg)),
        features,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;

    fs::write(path.with_extension("prj"), crs.wkt)?;

    log::info!(
        "Wrote {} extended cross-sections to {} (EPSG:{epsg})",
        lines.len(),
        path.display()
    );
    Ok(())
}
