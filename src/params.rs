use std::path::PathBuf;

use crate::consts::{DEFAULT_ID_FIELD, DEFAULT_OUTPUT_EPSG, EXTRAPOLATION_RATIO};
use crate::geometry::check_ratio;
use crate::glacier::GlacierId;
use crate::Result;

/// Which two points of a cross-section define the direction of its extension
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionPair {
    /// The last two points
    #[default]
    Tail,
    /// The first two points
    Head,
}

#[derive(Clone, Debug)]
pub struct ExtendParams {
    pub ratio: f64,
    pub direction: DirectionPair,
}

impl ExtendParams {
    /// Fails on settings that would make every cross-section fail
    pub fn validate(&self) -> Result<()> {
        check_ratio(self.ratio)
    }
}

impl Default for ExtendParams {
    fn default() -> Self {
        Self {
            ratio: EXTRAPOLATION_RATIO,
            direction: DirectionPair::Tail,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FileParams {
    pub outlines: PathBuf,
    pub cross_sections: PathBuf,
    pub output: PathBuf,

    // attribute grouping outlines and cross-sections
    pub id_field: String,
    pub output_epsg: u16,

    pub preview: Option<PreviewParams>,
}

impl Default for FileParams {
    fn default() -> Self {
        Self {
            outlines: PathBuf::new(),
            cross_sections: PathBuf::new(),
            output: PathBuf::from("extended_cross_sections.geojson"),
            id_field: DEFAULT_ID_FIELD.to_string(),
            output_epsg: DEFAULT_OUTPUT_EPSG,
            preview: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PreviewParams {
    pub glacier: GlacierId,
    pub path: PathBuf,
}
