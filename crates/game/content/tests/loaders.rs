use std::fs;
use std::path::Path;

use game_content::{ContentFactory, MapLoader};
use game_core::{GameConfig, Position, TileKind};
use tempfile::tempdir;

fn bundled_data() -> ContentFactory {
    ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn bundled_content_loads() {
    let factory = bundled_data();

    let config = factory.load_config().expect("config.toml should parse");
    assert_eq!(config, GameConfig::default());

    let catalog = factory.load_items().expect("items.ron should parse");
    assert!(catalog.potion().is_some());
    assert!(catalog.find(game_core::GOLD_BAG_NAME).is_some());

    let floors = factory.load_floors().expect("floors should parse");
    let names: Vec<_> = floors.iter().map(|floor| floor.name()).collect();
    assert_eq!(names, ["Map1", "Map2", "Map3"]);
    for floor in &floors {
        assert_eq!(floor.dimensions().width, 5);
        assert_eq!(floor.dimensions().height, 5);
        assert!(floor.start().is_some());
        assert!(floor.positions().any(|p| floor.tile(p) == Some(TileKind::Exit)));
    }
}

#[test]
fn single_floor_by_name() {
    let floor = bundled_data().load_floor("Map2").unwrap();
    assert_eq!(floor.start(), Some(Position::new(0, 4)));
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), GameConfig::default());
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_items().unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn empty_catalog_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();
    let err = ContentFactory::new(dir.path()).load_items().unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn floors_are_ordered_by_file_name_and_other_files_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.ron"), r#"(rows: ["sf"])"#).unwrap();
    fs::write(dir.path().join("a.ron"), r#"(rows: ["fs"])"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a floor").unwrap();

    let floors = MapLoader::load_dir(dir.path()).unwrap();

    let names: Vec<_> = floors.iter().map(|floor| floor.name()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(floors[0].start(), Some(Position::new(1, 0)));
}

#[test]
fn empty_floor_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(MapLoader::load_dir(dir.path()).is_err());
}
