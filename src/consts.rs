// large enough for the extended line to leave any glacier outline,
// small enough to keep ~1e-5 m precision for utm coordinates and 10 m cross-sections
pub const EXTRAPOLATION_RATIO: f64 = 1e10;

// relative to the polygon extent around the midpoint of the clipped line
pub const CLIP_EPSILON: f64 = 1e-9;

pub const DEFAULT_ID_FIELD: &str = "id1";
pub const DEFAULT_OUTPUT_EPSG: u16 = 32640;
