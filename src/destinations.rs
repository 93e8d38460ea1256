use std::fmt;

use crate::error::{PlantError, Result};
use crate::models::PlantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Built-in icon, referenced by name.
    System(&'static str),
    /// Icon shipped with the app's own assets.
    Resource(&'static str),
}

/// The screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Todo,
    Overview,
    Detail { plant_id: PlantId },
}

const TODO_ROUTE: &str = "plant-todo";
const OVERVIEW_ROUTE: &str = "plant-overview";
const DETAIL_ROUTE: &str = "plant-detail";

impl Destination {
    /// Screens reachable from the bottom navigation bar.
    pub const TOP_LEVEL: [Destination; 2] = [Destination::Todo, Destination::Overview];

    pub fn route(&self) -> String {
        match self {
            Destination::Todo => TODO_ROUTE.to_string(),
            Destination::Overview => OVERVIEW_ROUTE.to_string(),
            Destination::Detail { plant_id } => format!("{}/{}", DETAIL_ROUTE, plant_id),
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Destination::Todo => Some("Por regar"),
            Destination::Overview => Some("Todas las plantas"),
            Destination::Detail { .. } => None,
        }
    }

    pub fn icon(&self) -> Option<Icon> {
        match self {
            Destination::Todo => Some(Icon::System("notifications")),
            Destination::Overview => Some(Icon::Resource("potted_plant")),
            Destination::Detail { .. } => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Destination::Detail { .. })
    }

    pub fn parse(route: &str) -> Result<Self> {
        let unknown = || PlantError::UnknownDestination(route.to_string());
        match route {
            TODO_ROUTE => Ok(Destination::Todo),
            OVERVIEW_ROUTE => Ok(Destination::Overview),
            _ => {
                let id = route
                    .strip_prefix(DETAIL_ROUTE)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .ok_or_else(unknown)?;
                let id = id.parse::<u32>().map_err(|_| unknown())?;
                Ok(Destination::Detail {
                    plant_id: PlantId(id),
                })
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route_it_renders() {
        let all = [
            Destination::Todo,
            Destination::Overview,
            Destination::Detail {
                plant_id: PlantId(3),
            },
        ];
        for dest in all {
            assert_eq!(Destination::parse(&dest.route()), Ok(dest));
        }
    }

    #[test]
    fn detail_has_no_title_or_icon() {
        let detail = Destination::Detail {
            plant_id: PlantId(1),
        };
        assert!(detail.is_detail());
        assert_eq!(detail.title(), None);
        assert_eq!(detail.icon(), None);
        assert_eq!(Destination::Overview.icon(), Some(Icon::Resource("potted_plant")));
        assert!(Destination::TOP_LEVEL.iter().all(|d| d.icon().is_some() && !d.is_detail()));
    }

    #[test]
    fn rejects_unknown_routes() {
        for route in ["plant-settings", "plant-detail", "plant-detail/abc", "plant-detailx/1"] {
            assert_eq!(
                Destination::parse(route),
                Err(PlantError::UnknownDestination(route.to_string()))
            );
        }
    }
}
