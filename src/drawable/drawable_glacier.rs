use crate::geometry::MapLineString;
use crate::glacier::{GlacierGroup, GlacierId};
use crate::steps::ExtendedLine;

use geo::{BoundingRect, Contains, Coord, LineString, Point, Polygon, Rect};

const OUTLINE_COLOR: &str = "blue";
const CROSS_SECTION_COLOR: &str = "green";
const EXTENDED_COLOR: &str = "orange";

/// Everything drawn for one glacier
#[derive(Clone, Debug)]
pub struct DrawableGlacier {
    pub id: GlacierId,
    pub outline: Polygon,
    pub cross_sections: Vec<LineString>,
    pub extended: Vec<LineString>,
}

impl DrawableGlacier {
    /// Keeps only the extended lines with their midpoint strictly inside the
    /// outline. Lines of other glaciers may pass this check, as in a plain overlay.
    pub fn new(group: &GlacierGroup, extended: &[ExtendedLine]) -> DrawableGlacier {
        let extended = extended
            .iter()
            .filter(|e| {
                e.line
                    .arc_length_midpoint()
                    .is_some_and(|m| group.outline.contains(&Point::from(m)))
            })
            .map(|e| e.line.clone())
            .collect();

        DrawableGlacier {
            id: group.id.clone(),
            outline: group.outline.clone(),
            cross_sections: group.cross_sections.iter().map(|c| c.line.clone()).collect(),
            extended,
        }
    }

    /// Renders easting/northing to an SVG `width` pixels wide, north up
    pub fn to_svg(&self, width: f64) -> Option<String> {
        let bounds = self.outline.bounding_rect()?;
        let view = ViewBox::new(bounds, width)?;

        let id = escape_xml(self.id.as_str());
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\">\n",
            view.width, view.height
        );
        svg.push_str(&format!(
            "<title>Glacier outline and cross-sections (id {id})</title>\n"
        ));

        for ring in std::iter::once(self.outline.exterior()).chain(self.outline.interiors()) {
            svg.push_str(&view.polyline(ring, OUTLINE_COLOR, 2.));
        }
        for line in &self.extended {
            svg.push_str(&view.polyline(line, EXTENDED_COLOR, 1.));
        }
        for line in &self.cross_sections {
            svg.push_str(&view.polyline(line, CROSS_SECTION_COLOR, 2.));
        }

        let legend = [
            (OUTLINE_COLOR, format!("Glacier outline (id {id})")),
            (CROSS_SECTION_COLOR, "Cross-sections".to_string()),
            (EXTENDED_COLOR, "Extended cross-sections".to_string()),
        ];
        for (i, (color, label)) in legend.iter().enumerate() {
            svg.push_str(&format!(
                "<text x=\"10\" y=\"{}\" fill=\"{color}\" font-size=\"14\">{label}</text>\n",
                20 + 18 * i
            ));
        }

        svg.push_str("</svg>\n");
        Some(svg)
    }
}

// glacier ids are free text
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct ViewBox {
    min: Coord,
    max_y: f64,
    scale: f64,
    width: f64,
    height: f64,
}

impl ViewBox {
    fn new(bounds: Rect, width: f64) -> Option<ViewBox> {
        // margin of 5% around the outline
        let margin = 0.05 * bounds.width().max(bounds.height());
        let extent = bounds.width().max(bounds.height()) + 2. * margin;
        if !(extent > 0.) || !(width > 0.) {
            return None;
        }

        let scale = width / (bounds.width() + 2. * margin);
        Some(ViewBox {
            min: Coord {
                x: bounds.min().x - margin,
                y: bounds.min().y - margin,
            },
            max_y: bounds.max().y + margin,
            scale,
            width,
            height: (bounds.height() + 2. * margin) * scale,
        })
    }

    fn polyline(&self, line: &LineString, color: &str, stroke_width: f64) -> String {
        let points: Vec<String> = line
            .coords()
            .map(|c| {
                format!(
                    "{:.2},{:.2}",
                    (c.x - self.min.x) * self.scale,
                    (self.max_y - c.y) * self.scale
                )
            })
            .collect();

        format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{stroke_width}\"/>\n",
            points.join(" ")
        )
    }
}
