use crate::drawable::DrawableGlacier;
use crate::glacier::{GlacierGroup, GlacierId};
use crate::steps::ExtendedLine;
use crate::Result;

use std::fs;
use std::path::Path;

const PREVIEW_WIDTH: f64 = 1000.;

/// Writes an SVG of one glacier. Returns false if the glacier is not among the
/// groups or its outline has no extent.
pub fn save_preview(
    glacier: &GlacierId,
    groups: &[GlacierGroup],
    extended: &[ExtendedLine],
    path: &Path,
) -> Result<bool> {
    let Some(group) = groups.iter().find(|g| &g.id == glacier) else {
        log::warn!("Glacier {glacier} is not available for preview");
        return Ok(false);
    };

    let drawable = DrawableGlacier::new(group, extended);
    let Some(svg) = drawable.to_svg(PREVIEW_WIDTH) else {
        log::warn!("Outline of glacier {glacier} has no extent, no preview written");
        return Ok(false);
    };

    fs::write(path, svg)?;
    log::info!(
        "Wrote preview of glacier {glacier} with {} extended cross-sections to {}",
        drawable.extended.len(),
        path.display()
    );
    Ok(true)
}
