use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::commands;
use crate::error::{PlantError, Result};
use crate::models::{Plant, PlantId};

/// Callback run after a plant has been changed, with the plant's new state.
pub type Observer = Box<dyn FnMut(&Plant) + Send>;

/// The in-memory collection of plants for one app session.
///
/// Insertion order of the seed is kept; it is the order every view
/// displays plants in.
pub struct Registry {
    plants: Vec<Plant>,
    index: HashMap<PlantId, usize>,
    observers: Vec<Observer>,
}

impl Registry {
    /// Builds the registry from seed plants. Fails on a repeated id.
    pub fn initialize(seed: Vec<Plant>) -> Result<Self> {
        let mut index = HashMap::with_capacity(seed.len());
        for (pos, plant) in seed.iter().enumerate() {
            if index.insert(plant.id, pos).is_some() {
                return Err(PlantError::DuplicateId(plant.id));
            }
        }
        debug!(plants = seed.len(), "registry initialized");

        Ok(Self {
            plants: seed,
            index,
            observers: Vec::new(),
        })
    }

    pub fn snapshot(&self) -> Vec<Plant> {
        self.plants.clone()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn find_by_id(&self, id: PlantId) -> Result<&Plant> {
        self.index
            .get(&id)
            .map(|&pos| &self.plants[pos])
            .ok_or(PlantError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Plant) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Applies `change` to the plant with `id` and then notifies observers.
    pub(crate) fn update<F>(&mut self, id: PlantId, change: F) -> Result<&Plant>
    where
        F: FnOnce(&mut Plant),
    {
        let pos = *self.index.get(&id).ok_or(PlantError::NotFound(id))?;
        change(&mut self.plants[pos]);

        let plant = &self.plants[pos];
        for observer in self.observers.iter_mut() {
            observer(plant);
        }
        Ok(plant)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("plants", &self.plants)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Registry behind one lock, for hosts that touch it from several threads.
/// Reads and the toggle share the same lock so a read that follows a toggle
/// always sees it.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Registry) -> R,
    {
        let mut registry = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut registry)
    }

    pub fn snapshot(&self) -> Vec<Plant> {
        self.with_registry(|registry| registry.snapshot())
    }

    pub fn find_by_id(&self, id: PlantId) -> Result<Plant> {
        self.with_registry(|registry| registry.find_by_id(id).cloned())
    }

    pub fn toggle_watered(&self, id: PlantId) -> Result<bool> {
        self.with_registry(|registry| commands::toggle_watered(registry, id))
    }

    pub fn subscribe<F>(&self, observer: F)
    where
        F: FnMut(&Plant) + Send + 'static,
    {
        self.with_registry(|registry| registry.subscribe(observer))
    }
}
