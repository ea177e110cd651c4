// The canvas keeps the 2:1 aspect ratio of the full longitude/latitude
// range so one degree maps to the same number of pixels on both axes.
pub(crate) const CANVAS_WIDTH: u32 = 1440;
pub(crate) const CANVAS_HEIGHT: u32 = 720;

// Label offsets in degrees, relative to the marker position.
pub(crate) const LABEL_OFFSET_LNG: f64 = 3.0;
pub(crate) const LABEL_OFFSET_LAT: f64 = 12.0;

/// Fixed output filename of the two-city route view.
pub const DISTANCE_MAP_FILE: &str = "distance_map.png";
