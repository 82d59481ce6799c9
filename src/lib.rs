pub mod consts;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod glacier;
pub mod layer;
pub mod params;
pub mod parser;
pub mod run_pipeline;
pub mod steps;

pub use error::{Error, Result};
pub use run_pipeline::run_pipeline;
