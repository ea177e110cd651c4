use svg::node::element::{Group, Line, Path, Rectangle, path::Data};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::Coordinates;

const OCEAN_BLUE: &str = "#a8c8e0";
const LAND_TAN: &str = "#c8bc94";
const SHORE_GRAY: &str = "#908870";
const GRATICULE_GRAY: &str = "#788088";

const GRATICULE_STEP: usize = 30;

// Coarse landmass outlines as (lng, lat) vertex rings. At canvas scale
// they only need to read as the familiar world silhouette.
const LANDMASSES: &[&[(f64, f64)]] = &[
    // North and Central America
    &[
        (-168.0, 66.0),
        (-150.0, 70.0),
        (-128.0, 70.0),
        (-100.0, 73.0),
        (-85.0, 69.0),
        (-80.0, 62.0),
        (-65.0, 60.0),
        (-55.0, 50.0),
        (-65.0, 44.0),
        (-75.0, 36.0),
        (-81.0, 30.0),
        (-90.0, 29.0),
        (-97.0, 26.0),
        (-97.0, 21.0),
        (-87.0, 16.0),
        (-83.0, 9.0),
        (-79.0, 9.0),
        (-85.0, 12.0),
        (-95.0, 16.0),
        (-105.0, 20.0),
        (-110.0, 23.0),
        (-117.0, 33.0),
        (-124.0, 40.0),
        (-124.0, 48.0),
        (-132.0, 55.0),
        (-145.0, 60.0),
        (-155.0, 58.0),
        (-165.0, 55.0),
    ],
    // South America
    &[
        (-79.0, 9.0),
        (-72.0, 12.0),
        (-60.0, 8.0),
        (-50.0, 0.0),
        (-35.0, -8.0),
        (-39.0, -17.0),
        (-48.0, -25.0),
        (-53.0, -34.0),
        (-62.0, -40.0),
        (-65.0, -47.0),
        (-68.0, -55.0),
        (-72.0, -50.0),
        (-71.0, -35.0),
        (-70.0, -18.0),
        (-76.0, -14.0),
        (-81.0, -5.0),
        (-77.0, 4.0),
    ],
    // Africa
    &[
        (-6.0, 36.0),
        (10.0, 37.0),
        (20.0, 33.0),
        (32.0, 31.0),
        (34.0, 27.0),
        (43.0, 12.0),
        (51.0, 11.0),
        (40.0, -5.0),
        (35.0, -20.0),
        (30.0, -30.0),
        (20.0, -35.0),
        (15.0, -28.0),
        (12.0, -18.0),
        (9.0, -2.0),
        (9.0, 4.0),
        (-8.0, 4.0),
        (-13.0, 9.0),
        (-17.0, 15.0),
        (-17.0, 21.0),
        (-10.0, 31.0),
    ],
    // Eurasia
    &[
        (-10.0, 36.0),
        (0.0, 38.0),
        (10.0, 44.0),
        (20.0, 40.0),
        (26.0, 38.0),
        (35.0, 36.0),
        (44.0, 30.0),
        (52.0, 25.0),
        (57.0, 20.0),
        (67.0, 24.0),
        (72.0, 20.0),
        (77.0, 8.0),
        (80.0, 13.0),
        (88.0, 22.0),
        (92.0, 15.0),
        (98.0, 8.0),
        (105.0, 2.0),
        (110.0, 6.0),
        (108.0, 18.0),
        (115.0, 22.0),
        (122.0, 30.0),
        (122.0, 37.0),
        (127.0, 40.0),
        (135.0, 44.0),
        (142.0, 48.0),
        (142.0, 54.0),
        (153.0, 59.0),
        (160.0, 60.0),
        (170.0, 66.0),
        (178.0, 70.0),
        (160.0, 70.0),
        (140.0, 72.0),
        (110.0, 74.0),
        (90.0, 73.0),
        (70.0, 68.0),
        (50.0, 69.0),
        (30.0, 70.0),
        (22.0, 71.0),
        (15.0, 68.0),
        (5.0, 62.0),
        (-2.0, 58.0),
        (-5.0, 50.0),
        (-2.0, 47.0),
        (-10.0, 44.0),
    ],
    // Australia
    &[
        (114.0, -22.0),
        (122.0, -17.0),
        (131.0, -12.0),
        (137.0, -12.0),
        (141.0, -13.0),
        (146.0, -19.0),
        (153.0, -26.0),
        (150.0, -37.0),
        (140.0, -38.0),
        (131.0, -32.0),
        (124.0, -33.0),
        (115.0, -34.0),
        (113.0, -26.0),
    ],
    // Greenland
    &[
        (-45.0, 60.0),
        (-30.0, 68.0),
        (-20.0, 70.0),
        (-25.0, 78.0),
        (-38.0, 80.0),
        (-55.0, 77.0),
        (-53.0, 70.0),
    ],
    // Antarctica
    &[
        (-180.0, -66.0),
        (-60.0, -63.0),
        (0.0, -68.0),
        (90.0, -65.0),
        (180.0, -66.0),
        (180.0, -90.0),
        (-180.0, -90.0),
    ],
];

/// The default world-surface layer every render starts from: ocean fill,
/// stylized continents, and a 30-degree graticule.
pub(crate) fn stock_backdrop() -> Group {
    let mut group = Group::new();

    let ocean = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("fill", OCEAN_BLUE);
    group = group.add(ocean);

    for ring in LANDMASSES {
        group = group.add(draw_landmass(ring));
    }

    group.add(graticule())
}

fn draw_landmass(ring: &[(f64, f64)]) -> Path {
    let mut points = ring
        .iter()
        .map(|&(lng, lat)| Coordinates::new(lat, lng).project(CANVAS_WIDTH, CANVAS_HEIGHT));

    // The rings are compile-time constants and never empty.
    let first = points.next().unwrap();

    let mut data = Data::new();
    data = data.move_to((first.x, first.y));

    for point in points {
        data = data.line_to((point.x, point.y));
    }

    data = data.close();

    Path::new()
        .set("fill", LAND_TAN)
        .set("stroke", SHORE_GRAY)
        .set("stroke-width", 1)
        .set("d", data)
}

fn graticule() -> Group {
    let mut group = Group::new()
        .set("stroke", GRATICULE_GRAY)
        .set("stroke-width", 0.5)
        .set("stroke-opacity", 0.6);

    for lng in (-180..=180).step_by(GRATICULE_STEP) {
        let x = Coordinates::new(0.0, lng as f64)
            .project(CANVAS_WIDTH, CANVAS_HEIGHT)
            .x;

        let meridian = Line::new()
            .set("x1", x)
            .set("y1", 0)
            .set("x2", x)
            .set("y2", CANVAS_HEIGHT);
        group = group.add(meridian);
    }

    for lat in (-90..=90).step_by(GRATICULE_STEP) {
        let y = Coordinates::new(lat as f64, 0.0)
            .project(CANVAS_WIDTH, CANVAS_HEIGHT)
            .y;

        let parallel = Line::new()
            .set("x1", 0)
            .set("y1", y)
            .set("x2", CANVAS_WIDTH)
            .set("y2", y);
        group = group.add(parallel);
    }

    group
}
