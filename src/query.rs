//! Read-only views over a registry snapshot: locations, groups, filtering
//! and watering progress.

use tracing::{debug, warn};

use crate::models::Plant;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup<'a> {
    pub location: &'a str,
    pub plants: Vec<&'a Plant>,
}

/// Groups left after applying the active-location filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<'a> {
    pub groups: Vec<LocationGroup<'a>>,
    /// Set when no location was active at all. Not an error, but worth
    /// telling the user about.
    pub nothing_selected: bool,
}

/// Every location in first-seen order, without duplicates.
pub fn distinct_locations(plants: &[Plant]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for plant in plants {
        if !locations.iter().any(|l| *l == plant.location) {
            locations.push(plant.location.clone());
        }
    }
    locations
}

pub fn group_by_location(plants: &[Plant]) -> Vec<LocationGroup<'_>> {
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    for plant in plants {
        match groups.iter_mut().find(|g| g.location == plant.location) {
            Some(group) => group.plants.push(plant),
            None => groups.push(LocationGroup {
                location: &plant.location,
                plants: vec![plant],
            }),
        }
    }
    debug!(groups = groups.len(), "grouped plants by location");
    groups
}

pub fn filter_by_active_locations<'a, S>(
    groups: Vec<LocationGroup<'a>>,
    active: &[S],
) -> Filtered<'a>
where
    S: AsRef<str>,
{
    if active.is_empty() {
        warn!("no location selected, nothing to show");
        return Filtered {
            groups: Vec::new(),
            nothing_selected: true,
        };
    }

    let groups = groups
        .into_iter()
        .filter(|g| active.iter().any(|a| a.as_ref() == g.location))
        .collect();
    Filtered {
        groups,
        nothing_selected: false,
    }
}

/// Share of watered plants, in `[0, 1]`. An empty list counts as `0`.
pub fn completion_ratio(plants: &[Plant]) -> f32 {
    if plants.is_empty() {
        return 0.0;
    }
    let watered = plants.iter().filter(|p| p.is_watered).count();
    watered as f32 / plants.len() as f32
}

/// Plants still waiting for water, in registry order.
pub fn pending(plants: &[Plant]) -> Vec<&Plant> {
    plants.iter().filter(|p| !p.is_watered).collect()
}

/// Renders a ratio as the percentage shown in the to-do header, e.g. `66.7%`.
pub fn format_progress(ratio: f32) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Which locations the overview currently shows.
///
/// Starts with every known location active; toggling a location works like
/// a filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFilter {
    all: Vec<String>,
    active: Vec<String>,
}

impl LocationFilter {
    pub fn new(plants: &[Plant]) -> Self {
        let all = distinct_locations(plants);
        Self {
            active: all.clone(),
            all,
        }
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, location: &str) -> bool {
        self.active.iter().any(|a| a == location)
    }

    /// Deselects an active location or selects an inactive one. Locations
    /// no plant lives in are ignored. Returns whether it is active afterwards.
    pub fn toggle(&mut self, location: &str) -> bool {
        if !self.all.iter().any(|l| l == location) {
            debug!(location, "ignoring unknown location");
            return false;
        }
        if self.is_active(location) {
            self.active.retain(|a| a != location);
            false
        } else {
            self.active.push(location.to_string());
            true
        }
    }

    pub fn is_empty_selection(&self) -> bool {
        self.active.is_empty()
    }

    pub fn apply<'a>(&self, plants: &'a [Plant]) -> Filtered<'a> {
        filter_by_active_locations(group_by_location(plants), &self.active)
    }
}
