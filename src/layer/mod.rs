pub mod geojson;
pub mod read;
pub mod write;

pub use self::read::{read_cross_sections, read_outlines, LayerFeature};
pub use self::write::write_extended_lines;
