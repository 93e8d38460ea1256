use tracing::{info, warn};

use crate::error::Result;
use crate::models::PlantId;
use crate::registry::Registry;

/// Flips the watered flag of the plant with `id` and returns the new value.
///
/// An unknown id leaves the registry untouched and yields `NotFound`.
pub fn toggle_watered(registry: &mut Registry, id: PlantId) -> Result<bool> {
    match registry.update(id, |plant| plant.is_watered = !plant.is_watered) {
        Ok(plant) => {
            info!(id = %plant.id, name = %plant.name, watered = plant.is_watered, "watering state changed");
            Ok(plant.is_watered)
        }
        Err(e) => {
            warn!(id = %id, "cannot change watering state: {}", e);
            Err(e)
        }
    }
}
