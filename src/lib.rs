//! Keeps track of which houseplants still need water.
//!
//! A [`registry::Registry`] holds the plants for one session, [`query`]
//! derives the to-do and per-location views from it, and
//! [`commands::toggle_watered`] is the only way a plant changes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod destinations;
pub mod error;
pub mod models;
pub mod query;
pub mod registry;
pub mod seed;
pub mod session;
pub mod view;

pub use error::{PlantError, Result};
pub use models::{ImageRef, Plant, PlantId};
pub use registry::{Registry, SharedRegistry};
