mod constants;
mod draw;
mod raster;
mod store;
mod types;

pub use constants::DISTANCE_MAP_FILE;
pub use store::CityStore;
pub use types::Coordinates;
