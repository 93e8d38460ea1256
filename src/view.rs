//! Plain-text rendering of the screens.

use crate::destinations::{Destination, Icon};
use crate::models::Plant;
use crate::query::{completion_ratio, format_progress, pending, Filtered, LocationFilter};

fn watered_mark(plant: &Plant) -> &'static str {
    if plant.is_watered {
        "[x]"
    } else {
        "[ ]"
    }
}

/// To-do list in registry order, each row marked with its watering state.
pub fn render_todo(plants: &[Plant]) -> String {
    let mut out = format!("Por regar: {}\n", format_progress(completion_ratio(plants)));
    if pending(plants).is_empty() {
        out.push_str("Todas las plantas están regadas\n");
    }
    for plant in plants {
        out.push_str(&format!(
            "{} {} ({}) '{}'\n",
            watered_mark(plant),
            plant.id,
            plant.location,
            plant.name
        ));
    }
    out
}

pub fn render_overview(filtered: &Filtered<'_>) -> String {
    if filtered.nothing_selected {
        return "Advertencia: no hay ubicaciones seleccionadas\n".to_string();
    }
    let mut out = String::new();
    for group in &filtered.groups {
        out.push_str(&format!("{}:\n", group.location));
        for plant in &group.plants {
            out.push_str(&format!("  {} {} '{}'\n", watered_mark(plant), plant.id, plant.name));
        }
    }
    out
}

pub fn render_filter(filter: &LocationFilter) -> String {
    filter
        .all()
        .iter()
        .map(|l| {
            if filter.is_active(l) {
                format!("[{}]", l)
            } else {
                l.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title line of a screen. The detail screen has none.
pub fn render_header(screen: Destination) -> Option<String> {
    screen.title().map(|title| format!("== {} ==\n", title))
}

/// Bottom navigation bar, with the current screen in brackets.
pub fn render_nav(current: Destination) -> String {
    let items: Vec<String> = Destination::TOP_LEVEL
        .iter()
        .map(|dest| {
            let icon = match dest.icon() {
                Some(Icon::System(name)) | Some(Icon::Resource(name)) => name,
                None => "",
            };
            let label = format!("{} {}", icon, dest.title().unwrap_or_default());
            if *dest == current {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    format!("{}\n", items.join(" | "))
}

pub fn render_detail(plant: &Plant) -> String {
    format!(
        "Nombre: '{}'\nUbicación: '{}'\nImagen: {}\nRegada: {}\nID: {}\n",
        plant.name,
        plant.location,
        plant.image_ref.0,
        if plant.is_watered { "sí" } else { "no" },
        plant.id,
    )
}
