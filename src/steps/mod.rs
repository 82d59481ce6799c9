pub mod extend_cross_sections;
pub mod group_glaciers;
pub mod save_preview;

pub use self::extend_cross_sections::{
    extend_cross_section, extend_cross_sections, ExtendedLine, ExtensionReport, Failure,
};
pub use self::group_glaciers::group_glaciers;
pub use self::save_preview::save_preview;
