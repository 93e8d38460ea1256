use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to the picture shown next to a plant. Never inspected here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageRef(pub String);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub location: String,
    #[serde(rename = "image")]
    pub image_ref: ImageRef,
    #[serde(default)]
    pub is_watered: bool,
}

impl Plant {
    pub fn new(id: u32, name: &str, location: &str, image: &str, is_watered: bool) -> Self {
        Self {
            id: PlantId(id),
            name: name.to_string(),
            location: location.to_string(),
            image_ref: ImageRef(image.to_string()),
            is_watered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_watered_flag() {
        let json = r#"{"id": 7, "name": "Monstera", "location": "Office", "image": "monstera"}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();

        assert_eq!(plant.id, PlantId(7));
        assert_eq!(plant.image_ref, ImageRef("monstera".to_string()));
        assert!(!plant.is_watered);
    }
}
