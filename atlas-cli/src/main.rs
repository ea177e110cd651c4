use std::path::PathBuf;

use atlas_core::{CityStore, DISTANCE_MAP_FILE};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Path to the SQLite database holding the city tables
    #[arg(short, long, default_value = "database.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the user/city association table if it is missing
    Init,
    /// Link a city to a user
    Add { user_id: i64, city: String },
    /// Print the cities linked to a user, one per line
    List { user_id: i64 },
    /// Render the given cities onto a world map image
    Map {
        /// Output image path; the extension selects the format
        #[arg(short, long, default_value = "city_map.png")]
        output: PathBuf,

        cities: Vec<String>,
    },
    /// Render the straight route between two cities
    Distance { from: String, to: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let store = CityStore::new(&args.database);

    // Running without a subcommand only makes sure the schema is in place.
    match args.command.unwrap_or(Command::Init) {
        Command::Init => store.create_user_table()?,
        Command::Add { user_id, city } => {
            if store.add_city(user_id, &city)? {
                println!("Linked {} to user {}", city, user_id);
            } else {
                println!("Unknown city: {}", city);
            }
        }
        Command::List { user_id } => {
            for city in store.select_cities(user_id)? {
                println!("{}", city);
            }
        }
        Command::Map { output, cities } => {
            store.render_city_map(&output, &cities)?;
            println!("Saved map to {}", output.display());
        }
        Command::Distance { from, to } => {
            store.render_distance_map(&from, &to)?;
            println!("Saved map to {}", DISTANCE_MAP_FILE);
        }
    }

    Ok(())
}
