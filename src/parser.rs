use std::path::PathBuf;

use clap::Parser;

use crate::consts::{DEFAULT_ID_FIELD, DEFAULT_OUTPUT_EPSG, EXTRAPOLATION_RATIO};
use crate::glacier::GlacierId;
use crate::params::{DirectionPair, ExtendParams, FileParams, PreviewParams};

/// Extend glacier cross-sections until they reach the glacier outline
#[derive(Parser, Clone, Debug)]
pub struct Args {
    /// Path to the glacier outlines, a GeoJSON FeatureCollection of polygons
    #[arg(short = 'p', long)]
    pub outlines: PathBuf,

    /// Path to the cross-sections, a GeoJSON FeatureCollection of line strings
    #[arg(short, long)]
    pub cross_sections: PathBuf,

    /// Path of the extended cross-sections output
    #[arg(short, long, default_value = "extended_cross_sections.geojson")]
    pub output: PathBuf,

    /// Attribute holding the glacier id in both input layers
    #[arg(short, long, default_value = DEFAULT_ID_FIELD)]
    pub id_field: String,

    /// EPSG code the output is tagged with, no reprojection is done
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_EPSG)]
    pub epsg: u16,

    /// How many cross-section lengths the line is extended in each direction
    #[arg(long, default_value_t = EXTRAPOLATION_RATIO)]
    pub ratio: f64,

    /// Which points of a cross-section define its direction
    #[arg(long, value_enum, default_value_t = DirectionPair::Tail)]
    pub direction: DirectionPair,

    /// Render the outline, cross-sections and extended lines of this glacier to SVG
    #[arg(long)]
    pub plot_glacier: Option<String>,

    /// Path of the SVG preview
    #[arg(long, default_value = "preview.svg")]
    pub plot_output: PathBuf,
}

impl Args {
    pub fn into_params(self) -> (FileParams, ExtendParams) {
        let preview = self.plot_glacier.map(|id| PreviewParams {
            glacier: GlacierId::new(id),
            path: self.plot_output,
        });

        let files = FileParams {
            outlines: self.outlines,
            cross_sections: self.cross_sections,
            output: self.output,
            id_field: self.id_field,
            output_epsg: self.epsg,
            preview,
        };

        let params = ExtendParams {
            ratio: self.ratio,
            direction: self.direction,
        };

        (files, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["XsExtend", "-p", "outlines.geojson", "-c", "cs.geojson"]);
        let (files, params) = args.into_params();

        assert_eq!(files.id_field, "id1");
        assert_eq!(files.output_epsg, 32640);
        assert!(files.preview.is_none());
        assert_eq!(params.ratio, 1e10);
        assert_eq!(params.direction, DirectionPair::Tail);
    }

    #[test]
    fn preview_and_direction() {
        let args = Args::parse_from([
            "XsExtend",
            "--outlines",
            "outlines.geojson",
            "--cross-sections",
            "cs.geojson",
            "--direction",
            "head",
            "--plot-glacier",
            "10",
        ]);
        let (files, params) = args.into_params();

        assert_eq!(params.direction, DirectionPair::Head);
        let preview = files.preview.expect("preview was requested");
        assert_eq!(preview.glacier, GlacierId::new("10"));
        assert_eq!(preview.path, PathBuf::from("preview.svg"));
    }
}
