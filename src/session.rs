//! Interactive session: one registry and one location filter kept alive for
//! as long as the user keeps typing commands.

use tracing::debug;

use crate::commands::toggle_watered;
use crate::destinations::Destination;
use crate::error::{PlantError, Result};
use crate::models::PlantId;
use crate::query::LocationFilter;
use crate::registry::Registry;
use crate::view;

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub struct Session {
    registry: Registry,
    filter: LocationFilter,
    screen: Destination,
}

impl Session {
    pub fn new(registry: Registry) -> Self {
        let filter = LocationFilter::new(registry.plants());
        Self {
            registry,
            filter,
            screen: Destination::Todo,
        }
    }

    pub fn screen(&self) -> Destination {
        self.screen
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Renders whatever screen the session is on. Top-level screens get a
    /// title line and the navigation bar.
    pub fn render(&self) -> Result<String> {
        let body = match self.screen {
            Destination::Todo => view::render_todo(self.registry.plants()),
            Destination::Overview => {
                let plants = self.registry.plants();
                format!(
                    "Filtro: {}\n{}",
                    view::render_filter(&self.filter),
                    view::render_overview(&self.filter.apply(plants))
                )
            }
            Destination::Detail { plant_id } => {
                return Ok(view::render_detail(self.registry.find_by_id(plant_id)?));
            }
        };
        let header = view::render_header(self.screen).unwrap_or_default();
        Ok(format!("{}{}{}", header, body, view::render_nav(self.screen)))
    }

    /// Handles one input line. Errors are turned into messages so the
    /// session keeps going.
    pub fn handle(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        debug!(cmd, arg, "session command");

        match self.dispatch(cmd, arg) {
            Ok(Some(out)) => Reply::Output(out),
            Ok(None) => Reply::Quit,
            Err(e) => Reply::Output(format!("Error: {}\n", describe(&e))),
        }
    }

    fn dispatch(&mut self, cmd: &str, arg: &str) -> Result<Option<String>> {
        match cmd {
            "salir" | "quit" => return Ok(None),
            "" => return Ok(Some(String::new())),
            "todo" => self.screen = Destination::Todo,
            "overview" => self.screen = Destination::Overview,
            "show" => {
                let plant_id = parse_id(arg)?;
                self.registry.find_by_id(plant_id)?;
                self.screen = Destination::Detail { plant_id };
            }
            "go" => {
                let dest = Destination::parse(arg)?;
                if let Destination::Detail { plant_id } = dest {
                    self.registry.find_by_id(plant_id)?;
                }
                self.screen = dest;
            }
            "water" => {
                toggle_watered(&mut self.registry, parse_id(arg)?)?;
            }
            "filter" => {
                self.filter.toggle(arg);
                self.screen = Destination::Overview;
            }
            _ => {
                return Ok(Some(
                    "Comandos: todo, overview, filter <ubicación>, water <id>, show <id>, go <ruta>, salir\n"
                        .to_string(),
                ))
            }
        }
        self.render().map(Some)
    }
}

fn parse_id(arg: &str) -> Result<PlantId> {
    arg.parse::<u32>()
        .map(PlantId)
        .map_err(|_| PlantError::InvalidId(arg.to_string()))
}

fn describe(e: &PlantError) -> String {
    match e {
        PlantError::NotFound(id) => format!("No se encontró planta con ID {}", id),
        PlantError::UnknownDestination(route) => format!("Ruta desconocida '{}'", route),
        PlantError::InvalidId(raw) => format!("ID inválido '{}'", raw),
        other => other.to_string(),
    }
}
