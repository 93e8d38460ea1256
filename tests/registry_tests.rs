use pretty_assertions::assert_eq;
use std::io::Write;

use mis_plantas::commands::toggle_watered;
use mis_plantas::query::{completion_ratio, distinct_locations, filter_by_active_locations, group_by_location};
use mis_plantas::seed::load_seed;
use mis_plantas::{Plant, PlantError, PlantId, Registry, SharedRegistry};

fn cactus_and_basil() -> Vec<Plant> {
    vec![
        Plant::new(1, "Cactus", "Living Room", "cactus", false),
        Plant::new(2, "Basil", "Kitchen", "basil", true),
    ]
}

#[test]
fn test_cactus_and_basil_scenario() {
    let mut registry = Registry::initialize(cactus_and_basil()).unwrap();

    let snapshot = registry.snapshot();
    let groups = group_by_location(&snapshot);
    let summary: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|g| (g.location, g.plants.iter().map(|p| p.name.as_str()).collect()))
        .collect();
    assert_eq!(
        summary,
        vec![("Living Room", vec!["Cactus"]), ("Kitchen", vec!["Basil"])]
    );

    assert_eq!(toggle_watered(&mut registry, PlantId(1)), Ok(true));

    let after = registry.snapshot();
    assert_eq!(after[0], Plant::new(1, "Cactus", "Living Room", "cactus", true));
    assert_eq!(completion_ratio(&after), 1.0);
}

#[test]
fn test_find_by_id_returns_each_seeded_plant() {
    let seed = cactus_and_basil();
    let registry = Registry::initialize(seed.clone()).unwrap();

    for plant in &seed {
        assert_eq!(registry.find_by_id(plant.id), Ok(plant));
    }
}

#[test]
fn test_toggle_unknown_id_leaves_snapshot_unchanged() {
    let mut registry = Registry::initialize(cactus_and_basil()).unwrap();
    let before = registry.snapshot();

    assert_eq!(
        toggle_watered(&mut registry, PlantId(3)),
        Err(PlantError::NotFound(PlantId(3)))
    );
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn test_distinct_locations_in_first_seen_order() {
    let plants = vec![
        Plant::new(1, "Basil", "Kitchen", "basil", false),
        Plant::new(2, "Rosemary", "Kitchen", "rosemary", false),
        Plant::new(3, "Bonsai", "Floor", "bonsai", false),
    ];

    assert_eq!(distinct_locations(&plants), vec!["Kitchen", "Floor"]);
}

#[test]
fn test_completion_ratio() {
    let plants = vec![
        Plant::new(1, "Cactus", "Living Room", "cactus", true),
        Plant::new(2, "Basil", "Kitchen", "basil", false),
        Plant::new(3, "Bonsai", "Floor", "bonsai", true),
    ];

    assert_eq!(completion_ratio(&[]), 0.0);
    assert!((completion_ratio(&plants) - 2.0 / 3.0).abs() < f32::EPSILON);
}

#[test]
fn test_empty_active_locations_yield_nothing() {
    let plants = cactus_and_basil();
    let none: Vec<String> = Vec::new();
    let filtered = filter_by_active_locations(group_by_location(&plants), &none);

    assert!(filtered.groups.is_empty());
    assert!(filtered.nothing_selected);
}

#[test]
fn test_shared_registry_notifies_observers() {
    let shared = SharedRegistry::new(Registry::initialize(cactus_and_basil()).unwrap());
    let (tx, rx) = std::sync::mpsc::channel();
    shared.subscribe(move |plant| {
        let _ = tx.send(plant.clone());
    });

    shared.toggle_watered(PlantId(2)).unwrap();

    let seen = rx.try_recv().unwrap();
    assert_eq!(seen, shared.find_by_id(PlantId(2)).unwrap());
    assert!(!seen.is_watered);
}

#[test]
fn test_seed_file_round_trips_into_registry() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 10, "name": "Fern", "location": "Bathroom", "image": "fern"}},
            {{"id": 11, "name": "Orchid", "location": "Bathroom", "image": "orchid", "is_watered": true}}
        ]"#
    )
    .unwrap();

    let registry = Registry::initialize(load_seed(file.path()).unwrap()).unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.find_by_id(PlantId(11)).unwrap().is_watered);
}

#[test]
fn test_seed_file_with_duplicate_ids_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "name": "Fern", "location": "Bathroom", "image": "fern"}},
            {{"id": 1, "name": "Orchid", "location": "Bathroom", "image": "orchid"}}
        ]"#
    )
    .unwrap();

    let seed = load_seed(file.path()).unwrap();
    assert_eq!(
        Registry::initialize(seed).unwrap_err(),
        PlantError::DuplicateId(PlantId(1))
    );
}
