use thiserror::Error;

use crate::models::PlantId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlantError {
    #[error("no plant with id {0}")]
    NotFound(PlantId),
    #[error("duplicate plant id {0} in seed data")]
    DuplicateId(PlantId),
    #[error("invalid plant id '{0}'")]
    InvalidId(String),
    #[error("invalid seed data: {0}")]
    Seed(String),
    #[error("unknown destination route '{0}'")]
    UnknownDestination(String),
}

pub type Result<T> = std::result::Result<T, PlantError>;
