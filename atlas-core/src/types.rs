use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A latitude/longitude pair in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    // Maps onto an equirectangular canvas: longitude runs linearly across
    // the width, latitude down the height with north at the top.
    pub(crate) fn project(&self, canvas_width: u32, canvas_height: u32) -> CanvasPoint {
        CanvasPoint {
            x: (self.lng + 180.0) / 360.0 * canvas_width as f64,
            y: (90.0 - self.lat) / 180.0 * canvas_height as f64,
        }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// A city resolved to its position, ready to be placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CityMarker {
    pub name: String,
    pub coords: Coordinates,
}
