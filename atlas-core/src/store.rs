use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{Level, span};

use crate::constants::DISTANCE_MAP_FILE;
use crate::draw;
use crate::raster;
use crate::types::{CityMarker, Coordinates};

// The foreign key is declarative only: SQLite leaves enforcement off
// unless the pragma is switched on, and we never switch it on.
const CREATE_USERS_CITIES_SQL: &str = "\
CREATE TABLE IF NOT EXISTS users_cities (
    user_id INTEGER,
    city_id INTEGER,
    FOREIGN KEY(city_id) REFERENCES cities(id)
)";

/// Facade over the city database and the map renderer.
///
/// Holds only the database path. Every operation opens its own
/// [`Connection`] and drops it on return, so no handle outlives the call
/// that needed it.
#[derive(Debug, Clone)]
pub struct CityStore {
    database: PathBuf,
}

impl CityStore {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        CityStore {
            database: database.into(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.database)
            .with_context(|| format!("failed to open database {}", self.database.display()))
    }

    /// Makes sure the `users_cities` association table exists.
    ///
    /// The `cities` lookup table is reference data maintained elsewhere
    /// and is never created here.
    pub fn create_user_table(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(CREATE_USERS_CITIES_SQL, [])?;

        Ok(())
    }

    /// Links `city_name` to `user_id`.
    ///
    /// Returns `false` without writing anything when no city matches the
    /// name exactly. When several cities share the name, an arbitrary one
    /// of them gets linked.
    pub fn add_city(&self, user_id: i64, city_name: &str) -> Result<bool> {
        let conn = self.connect()?;

        let city_id: Option<i64> = conn
            .query_row(
                "SELECT id FROM cities WHERE city = ?1",
                params![city_name],
                |row| row.get(0),
            )
            .optional()?;

        match city_id {
            Some(city_id) => {
                conn.execute(
                    "INSERT INTO users_cities VALUES (?1, ?2)",
                    params![user_id, city_id],
                )?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Lists the city names linked to `user_id`, in database iteration
    /// order. Linking the same city twice yields it twice.
    pub fn select_cities(&self, user_id: i64) -> Result<Vec<String>> {
        let conn = self.connect()?;

        let mut statement = conn.prepare(
            "SELECT cities.city \
             FROM users_cities \
             JOIN cities ON users_cities.city_id = cities.id \
             WHERE users_cities.user_id = ?1",
        )?;

        let rows = statement.query_map(params![user_id], |row| row.get(0))?;

        let mut cities = Vec::new();
        for city in rows {
            cities.push(city?);
        }

        Ok(cities)
    }

    /// Looks up the stored position of `city_name`.
    ///
    /// A missing city is a regular `None`, not an error.
    pub fn get_coordinates(&self, city_name: &str) -> Result<Option<Coordinates>> {
        let conn = self.connect()?;

        let coordinates = conn
            .query_row(
                "SELECT lat, lng FROM cities WHERE city = ?1",
                params![city_name],
                |row| Ok(Coordinates::new(row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        Ok(coordinates)
    }

    /// Renders a world map with a marker and label for every resolvable
    /// name in `cities` and writes it to `path`, replacing any existing
    /// file. Names without coordinates are skipped.
    pub fn render_city_map(&self, path: impl AsRef<Path>, cities: &[impl AsRef<str>]) -> Result<()> {
        let span = span!(Level::DEBUG, "render_city_map");
        let _guard = span.enter();

        let mut markers = Vec::with_capacity(cities.len());

        for city in cities {
            let city = city.as_ref();

            match self.get_coordinates(city)? {
                Some(coords) => markers.push(CityMarker {
                    name: city.to_owned(),
                    coords,
                }),
                None => tracing::debug!(city, "no coordinates found, skipping"),
            }
        }

        let document = draw::city_map(&markers);

        raster::save(&document, path.as_ref())
    }

    /// Draws the straight segment between two cities and writes the image
    /// to [`DISTANCE_MAP_FILE`] in the working directory, replacing any
    /// existing file.
    ///
    /// Unlike [`Self::render_city_map`], a name without coordinates is an
    /// error here, and no file is written.
    pub fn render_distance_map(&self, from: &str, to: &str) -> Result<()> {
        let span = span!(Level::DEBUG, "render_distance_map");
        let _guard = span.enter();

        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        let document = draw::route_map(&from, &to);

        raster::save(&document, Path::new(DISTANCE_MAP_FILE))
    }

    fn resolve(&self, city_name: &str) -> Result<CityMarker> {
        match self.get_coordinates(city_name)? {
            Some(coords) => Ok(CityMarker {
                name: city_name.to_owned(),
                coords,
            }),
            None => Err(anyhow::anyhow!(r#"no coordinates for city "{}""#, city_name)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    const SEED_SQL: &str = "\
CREATE TABLE cities (
    id INTEGER PRIMARY KEY,
    city TEXT,
    lat REAL,
    lng REAL
);
INSERT INTO cities VALUES (1, 'London', 51.5074, -0.1278);
INSERT INTO cities VALUES (2, 'Tokyo', 35.6895, 139.6917);
INSERT INTO cities VALUES (3, 'Lima', -12.0464, -77.0428);
";

    fn seeded_store(dir: &TempDir) -> CityStore {
        let database = dir.path().join("cities.db");

        let conn = Connection::open(&database).unwrap();
        conn.execute_batch(SEED_SQL).unwrap();

        let store = CityStore::new(database);
        store.create_user_table().unwrap();
        store
    }

    #[test]
    fn test_add_city_known() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(store.add_city(7, "London").unwrap());
        assert_eq!(store.select_cities(7).unwrap(), vec!["London"]);
    }

    #[test]
    fn test_add_city_unknown() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        store.add_city(7, "Tokyo").unwrap();

        assert!(!store.add_city(7, "Atlantis").unwrap());
        // The failed insert must not have changed the user's list.
        assert_eq!(store.select_cities(7).unwrap(), vec!["Tokyo"]);
    }

    #[test]
    fn test_add_city_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(!store.add_city(7, "london").unwrap());
    }

    #[test]
    fn test_add_city_allows_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(store.add_city(7, "Lima").unwrap());
        assert!(store.add_city(7, "Lima").unwrap());

        assert_eq!(store.select_cities(7).unwrap(), vec!["Lima", "Lima"]);
    }

    #[test]
    fn test_select_cities_without_associations() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(store.select_cities(42).unwrap().is_empty());
    }

    #[test]
    fn test_select_cities_is_per_user() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        store.add_city(1, "London").unwrap();
        store.add_city(2, "Tokyo").unwrap();

        assert_eq!(store.select_cities(1).unwrap(), vec!["London"]);
        assert_eq!(store.select_cities(2).unwrap(), vec!["Tokyo"]);
    }

    #[test]
    fn test_get_coordinates_known() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let coords = store.get_coordinates("Lima").unwrap().unwrap();

        assert_eq!(coords, Coordinates::new(-12.0464, -77.0428));
    }

    #[test]
    fn test_get_coordinates_unknown() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(store.get_coordinates("Atlantis").unwrap().is_none());
    }

    #[test]
    fn test_create_user_table_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        // `seeded_store` already created the table once.
        store.create_user_table().unwrap();

        let conn = Connection::open(dir.path().join("cities.db")).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT count(*) FROM sqlite_master \
                 WHERE type = 'table' AND name = 'users_cities'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(tables, 1);
    }

    #[test]
    fn test_render_city_map_skips_unknown_cities() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let output = dir.path().join("map.svg");
        store
            .render_city_map(&output, &["London", "Atlantis", "Tokyo"])
            .unwrap();

        let scene = fs::read_to_string(&output).unwrap();
        assert!(scene.contains("London"));
        assert!(scene.contains("Tokyo"));
        assert!(!scene.contains("Atlantis"));
    }

    #[test]
    fn test_render_city_map_writes_raster_output() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let output = dir.path().join("map.png");
        store.render_city_map(&output, &["London"]).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_render_distance_map_known_cities() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        store.render_distance_map("London", "Tokyo").unwrap();

        let output = Path::new(DISTANCE_MAP_FILE);
        assert!(output.exists());
        fs::remove_file(output).unwrap();
    }

    #[test]
    fn test_render_distance_map_unknown_city_fails() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        assert!(store.render_distance_map("London", "Atlantis").is_err());
    }
}
