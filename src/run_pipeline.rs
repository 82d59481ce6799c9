use crate::layer::{read_cross_sections, read_outlines, write_extended_lines};
use crate::params::{ExtendParams, FileParams};
use crate::steps::{self, ExtensionReport};
use crate::Result;

/// Reads both layers, extends every cross-section and writes the result.
///
/// Errors from single features, glaciers or cross-sections end up in the
/// returned report. Invalid parameters, unreadable layers and failing writes
/// abort the run.
pub fn run_pipeline(files: &FileParams, params: &ExtendParams) -> Result<ExtensionReport> {
    params.validate()?;

    let (outlines, outline_failures) = read_outlines(&files.outlines, &files.id_field)?;
    let (cross_sections, cross_section_failures) =
        read_cross_sections(&files.cross_sections, &files.id_field)?;

    let (groups, grouping_failures) = steps::group_glaciers(outlines, cross_sections);
    log::info!("Extending cross-sections of {} glaciers...", groups.len());

    let mut report = steps::extend_cross_sections(&groups, params);
    report.failures.extend(grouping_failures);
    report.failures.extend(outline_failures);
    report.failures.extend(cross_section_failures);

    write_extended_lines(
        &files.output,
        &report.extended,
        &files.id_field,
        files.output_epsg,
    )?;

    if let Some(preview) = &files.preview {
        steps::save_preview(&preview.glacier, &groups, &report.extended, &preview.path)?;
    }

    log_report(&report);
    Ok(report)
}

fn log_report(report: &ExtensionReport) {
    log::info!(
        "Extended {} cross-sections, {} failures",
        report.extended.len(),
        report.failures.len()
    );

    for failure in &report.failures {
        log::warn!("{failure}");
    }
}
