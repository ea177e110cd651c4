use svg::Document;
use svg::node::element::{Circle, Line, Text};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, LABEL_OFFSET_LAT, LABEL_OFFSET_LNG};
use crate::types::{CityMarker, Coordinates};

mod backdrop;

const MARKER_RED: &str = "#f80000";
const LABEL_GRAY: &str = "#202020";

const MARKER_RADIUS: f64 = 4.0;
const ROUTE_WIDTH: f64 = 2.0;

const LABEL_FONT_SIZE: u32 = 16;
const LABEL_FONT_FAMILY: &str = "sans-serif";

/// Composes the multi-city scene: the stock backdrop plus one marker and
/// label per resolved city.
///
/// Every call builds a fresh [`Document`], so renders never share canvas
/// state.
pub(crate) fn city_map(markers: &[CityMarker]) -> Document {
    let mut document = base_document();

    for marker in markers {
        document = document.add(draw_marker(marker));
        document = document.add(draw_label(marker));
    }

    document
}

/// Composes the two-city route scene: backdrop, connecting segment, and a
/// marker and label at both endpoints. The segment is a straight line on
/// the projected canvas, not a great-circle arc.
pub(crate) fn route_map(from: &CityMarker, to: &CityMarker) -> Document {
    let mut document = base_document();

    let from_point = from.coords.project(CANVAS_WIDTH, CANVAS_HEIGHT);
    let to_point = to.coords.project(CANVAS_WIDTH, CANVAS_HEIGHT);

    let segment = Line::new()
        .set("x1", from_point.x)
        .set("y1", from_point.y)
        .set("x2", to_point.x)
        .set("y2", to_point.y)
        .set("stroke", MARKER_RED)
        .set("stroke-width", ROUTE_WIDTH);

    document = document.add(segment);

    for marker in [from, to] {
        document = document.add(draw_marker(marker));
        document = document.add(draw_label(marker));
    }

    document
}

fn base_document() -> Document {
    Document::new()
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .add(backdrop::stock_backdrop())
}

fn draw_marker(marker: &CityMarker) -> Circle {
    let point = marker.coords.project(CANVAS_WIDTH, CANVAS_HEIGHT);

    Circle::new()
        .set("cx", point.x)
        .set("cy", point.y)
        .set("r", MARKER_RADIUS)
        .set("fill", MARKER_RED)
}

fn draw_label(marker: &CityMarker) -> Text {
    // The offset is in degrees so it scales with the projection and the
    // label clears the marker instead of sitting on top of it.
    let anchor = Coordinates::new(
        marker.coords.lat + LABEL_OFFSET_LAT,
        marker.coords.lng + LABEL_OFFSET_LNG,
    );
    let point = anchor.project(CANVAS_WIDTH, CANVAS_HEIGHT);

    Text::new(marker.name.clone())
        .set("x", point.x)
        .set("y", point.y)
        .set("fill", LABEL_GRAY)
        .set("font-size", LABEL_FONT_SIZE)
        .set("font-family", LABEL_FONT_FAMILY)
        .set("text-anchor", "start")
}
