pub mod intersection;
pub mod line;
pub mod line_string;
pub mod multi_line_string;
pub mod polygon;
pub mod resolve;

pub use self::intersection::{GeometryKind, Intersection};
pub use self::line::{check_ratio, extrapolate, extrapolate_with_ratio, Line};
pub use self::line_string::{LineString, MapLineString};
pub use self::multi_line_string::{MapMultiLineString, MultiLineString};
pub use self::polygon::{MapPolygon, Polygon};
pub use self::resolve::resolve;
