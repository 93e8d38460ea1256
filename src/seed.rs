use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlantError, Result};
use crate::models::Plant;

/// The plants the app starts with when no seed file is configured.
pub fn sample_plants() -> Vec<Plant> {
    vec![
        Plant::new(1, "Cactus", "Living Room", "cactus", false),
        Plant::new(2, "Bonsai", "Floor", "bonsai", true),
        Plant::new(3, "Basil", "Kitchen", "basil", false),
        Plant::new(4, "Aloe Vera", "Living Room", "aloe_vera", true),
        Plant::new(5, "Rosemary", "Kitchen", "rosemary", false),
        Plant::new(6, "Monstera", "Office", "monstera", false),
        Plant::new(7, "Orchid", "Bathroom", "orchid", true),
        Plant::new(8, "Fern", "Bathroom", "fern", false),
    ]
}

/// Reads seed plants from a JSON array. The file is only ever read.
pub fn load_seed(path: &Path) -> Result<Vec<Plant>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| PlantError::Seed(format!("{}: {}", path.display(), e)))?;
    let plants: Vec<Plant> = serde_json::from_str(&raw)
        .map_err(|e| PlantError::Seed(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), plants = plants.len(), "seed file loaded");
    Ok(plants)
}
