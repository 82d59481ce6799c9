use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Position = Vec<f64>;

#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<NamedCrs>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    pub fn from_line_string(line: &LineString) -> Geometry {
        Geometry::LineString(line.coords().map(|c| vec![c.x, c.y]).collect())
    }
}

/// Legacy GeoJSON crs member, still read by most GIS software
#[derive(Debug, Serialize, Deserialize)]
pub struct NamedCrs {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: NamedCrsProperties,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamedCrsProperties {
    pub name: String,
}

impl NamedCrs {
    pub fn from_epsg(code: u16) -> NamedCrs {
        NamedCrs {
            kind: "name".to_string(),
            properties: NamedCrsProperties {
                name: format!("urn:ogc:def:crs:EPSG::{code}"),
            },
        }
    }
}

/// None if the position has less than two ordinates, any z is dropped
pub fn to_coord(position: &[f64]) -> Option<Coord> {
    match position {
        [x, y, ..] => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

pub fn to_line_string(positions: &[Position]) -> Option<LineString> {
    positions
        .iter()
        .map(|p| to_coord(p))
        .collect::<Option<Vec<_>>>()
        .map(LineString::new)
}

pub fn to_polygon(rings: &[Vec<Position>]) -> Option<Polygon> {
    let (exterior, interiors) = rings.split_first()?;

    let exterior = to_line_string(exterior)?;
    let interiors = interiors
        .iter()
        .map(|r| to_line_string(r))
        .collect::<Option<Vec<_>>>()?;

    Some(Polygon::new(exterior, interiors))
}
