use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_LOG_FILTER;

#[derive(Parser, Debug)]
#[command(name = "mis-plantas")]
#[command(about = "Una CLI para llevar el riego de mis plantas de interior")]
pub struct Cli {
    /// Archivo JSON con las plantas iniciales
    #[arg(long = "seed-file", env = "PLANTAS_SEED_FILE", global = true)]
    pub seed_file: Option<PathBuf>,

    /// Filtro de logs (sintaxis de RUST_LOG)
    #[arg(long = "log", env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER, global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ver las plantas por regar y el progreso
    Todo,
    /// Ver todas las plantas agrupadas por ubicación
    Overview {
        /// Mostrar solo estas ubicaciones (repetible)
        #[arg(short = 'l', long = "location")]
        locations: Vec<String>,
    },
    /// Listar las ubicaciones
    Locations,
    /// Ver el detalle de una planta
    Show {
        /// ID de la planta
        #[arg(long)]
        id: u32,
    },
    /// Marcar o desmarcar plantas como regadas
    Water {
        /// IDs de las plantas (repetible)
        #[arg(long = "id", required = true)]
        ids: Vec<u32>,
    },
    /// Sesión interactiva por stdin
    Session,
}
