use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mis_plantas::cli::{Cli, Commands};
use mis_plantas::commands::toggle_watered;
use mis_plantas::config::Config;
use mis_plantas::query::{distinct_locations, filter_by_active_locations, group_by_location};
use mis_plantas::session::{Reply, Session};
use mis_plantas::{view, PlantError, PlantId, Registry};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Logs go to stderr, stdout is for the plants.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = match config.seed() {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Error al leer las plantas iniciales: {}", e);
            return Err(e.into());
        }
    };
    let mut registry = match Registry::initialize(seed) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error al cargar las plantas: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Todo => {
            print!("{}", view::render_todo(registry.plants()));
        }
        Commands::Overview { locations } => {
            let plants = registry.plants();
            let active = if locations.is_empty() {
                distinct_locations(plants)
            } else {
                locations
            };
            let filtered = filter_by_active_locations(group_by_location(plants), &active);
            if filtered.groups.is_empty() && !filtered.nothing_selected {
                println!("No se encontraron plantas en esas ubicaciones");
            } else {
                print!("{}", view::render_overview(&filtered));
            }
        }
        Commands::Locations => {
            for location in distinct_locations(registry.plants()) {
                println!("{}", location);
            }
        }
        Commands::Show { id } => match registry.find_by_id(PlantId(id)) {
            Ok(plant) => print!("{}", view::render_detail(plant)),
            Err(PlantError::NotFound(_)) => println!("No se encontró planta con ID {}", id),
            Err(e) => return Err(e.into()),
        },
        Commands::Water { ids } => {
            for id in ids {
                match toggle_watered(&mut registry, PlantId(id)) {
                    Ok(true) => println!("Planta ID {} regada", id),
                    Ok(false) => println!("Planta ID {} marcada como por regar", id),
                    Err(PlantError::NotFound(_)) => println!("No se encontró planta con ID {}", id),
                    Err(e) => return Err(e.into()),
                }
            }
            println!();
            print!("{}", view::render_todo(registry.plants()));
        }
        Commands::Session => run_session(registry)?,
    }

    Ok(())
}

fn run_session(registry: Registry) -> Result<()> {
    let mut session = Session::new(registry);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", session.render()?)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line) {
            Reply::Output(out) => write!(stdout, "{}", out)?,
            Reply::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}
