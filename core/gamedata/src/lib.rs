//! FILENAME: core/gamedata/src/lib.rs
//! Game Data Module
//!
//! Loads the static game data (items, recipes, belts, assemblers, fuels,
//! storage boxes) from JSON into typed, validated catalogs.

mod catalog;
mod error;
pub mod records;

pub use catalog::Catalog;
pub use error::GameDataError;
pub use records::{Assembler, Belt, Fuel, Item, Record, RecordKind, Recipe, StorageBox};

use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// ============================================================================
// FILE LAYOUT
// ============================================================================

/// On-disk shape of a game data file. Every kind is an ordered array so
/// tables built from it enumerate records in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGameData {
    pub items: Vec<Item>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub belts: Vec<Belt>,
    #[serde(default)]
    pub assemblers: Vec<Assembler>,
    #[serde(default)]
    pub fuels: Vec<Fuel>,
    #[serde(default)]
    pub boxes: Vec<StorageBox>,
}

// ============================================================================
// GAME DATA
// ============================================================================

/// Validated game data, one catalog per record kind.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub items: Catalog<Item>,
    pub recipes: Catalog<Recipe>,
    pub belts: Catalog<Belt>,
    pub assemblers: Catalog<Assembler>,
    pub fuels: Catalog<Fuel>,
    pub boxes: Catalog<StorageBox>,
}

impl GameData {
    /// Validates every catalog and checks that recipes, belts, assemblers,
    /// fuels and boxes are known items.
    pub fn from_raw(raw: RawGameData) -> Result<Self, GameDataError> {
        let data = GameData {
            items: Catalog::new(raw.items)?,
            recipes: Catalog::new(raw.recipes)?,
            belts: Catalog::new(raw.belts)?,
            assemblers: Catalog::new(raw.assemblers)?,
            fuels: Catalog::new(raw.fuels)?,
            boxes: Catalog::new(raw.boxes)?,
        };

        data.check_item_refs(&data.recipes)?;
        data.check_item_refs(&data.belts)?;
        data.check_item_refs(&data.assemblers)?;
        data.check_item_refs(&data.fuels)?;
        data.check_item_refs(&data.boxes)?;

        Ok(data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, GameDataError> {
        let raw: RawGameData = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GameDataError> {
        let raw: RawGameData = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Loads and validates a game data file.
    pub fn load(path: &Path) -> Result<Self, GameDataError> {
        let file = File::open(path)?;
        let data = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded game data from {:?}: {} items, {} recipes, {} belts, {} assemblers, {} fuels, {} boxes",
            path,
            data.items.len(),
            data.recipes.len(),
            data.belts.len(),
            data.assemblers.len(),
            data.fuels.len(),
            data.boxes.len()
        );
        Ok(data)
    }

    pub fn item(&self, name: &str) -> Result<&Item, GameDataError> {
        self.items.get(name)
    }

    pub fn recipe(&self, name: &str) -> Result<&Recipe, GameDataError> {
        self.recipes.get(name)
    }

    pub fn belt(&self, name: &str) -> Result<&Belt, GameDataError> {
        self.belts.get(name)
    }

    pub fn assembler(&self, name: &str) -> Result<&Assembler, GameDataError> {
        self.assemblers.get(name)
    }

    pub fn fuel(&self, name: &str) -> Result<&Fuel, GameDataError> {
        self.fuels.get(name)
    }

    pub fn storage_box(&self, name: &str) -> Result<&StorageBox, GameDataError> {
        self.boxes.get(name)
    }

    fn check_item_refs<T: Record>(&self, catalog: &Catalog<T>) -> Result<(), GameDataError> {
        match catalog.iter().find(|record| !self.items.contains(record.name())) {
            Some(record) => Err(GameDataError::UnknownItem {
                kind: T::KIND,
                name: record.name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "items": [
            { "name": "transport-belt", "stack_size": 100 },
            { "name": "assembling-machine-1", "stack_size": 50 },
            { "name": "coal", "stack_size": 50 },
            { "name": "wooden-chest", "stack_size": 50 }
        ],
        "recipes": [ { "name": "transport-belt", "energy": 0.5 } ],
        "belts": [ { "name": "transport-belt", "throughput": 15.0 } ],
        "assemblers": [ { "name": "assembling-machine-1", "speed": 0.5 } ],
        "fuels": [ { "name": "coal", "energy": 4.0 } ],
        "boxes": [ { "name": "wooden-chest", "size": 16 } ]
    }"#;

    #[test]
    fn test_loads_typed_records() {
        let data = GameData::from_json_str(SAMPLE).unwrap();

        assert_eq!(data.item("coal").unwrap().stack_size, 50);
        assert_eq!(data.recipe("transport-belt").unwrap().energy, 0.5);
        assert_eq!(data.belt("transport-belt").unwrap().throughput, 15.0);
        assert_eq!(data.assembler("assembling-machine-1").unwrap().speed, 0.5);
        assert_eq!(data.fuel("coal").unwrap().energy, 4.0);
        assert_eq!(data.storage_box("wooden-chest").unwrap().size, 16);
    }

    #[test]
    fn test_missing_lookup_fails() {
        let data = GameData::from_json_str(SAMPLE).unwrap();
        let err = data.item("uranium-ore").unwrap_err();
        assert_eq!(err.to_string(), "item not found: uranium-ore");
    }

    #[test]
    fn test_missing_field_fails_at_load() {
        let json = r#"{ "items": [ { "name": "coal" } ] }"#;
        assert!(matches!(GameData::from_json_str(json), Err(GameDataError::Json(_))));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = r#"{ "items": [], "planets": [] }"#;
        assert!(matches!(GameData::from_json_str(json), Err(GameDataError::Json(_))));
    }

    #[test]
    fn test_belt_must_be_known_item() {
        let json = r#"{
            "items": [ { "name": "coal", "stack_size": 50 } ],
            "belts": [ { "name": "transport-belt", "throughput": 15.0 } ]
        }"#;
        match GameData::from_json_str(json) {
            Err(GameDataError::UnknownItem { kind, name }) => {
                assert_eq!(kind, RecordKind::Belt);
                assert_eq!(name, "transport-belt");
            }
            other => panic!("Expected UnknownItem, got {:?}", other),
        }
    }

    #[test]
    fn test_recipe_must_be_known_item() {
        let json = r#"{
            "items": [ { "name": "coal", "stack_size": 50 } ],
            "recipes": [ { "name": "no-such-item", "energy": 1.0 } ]
        }"#;
        match GameData::from_json_str(json) {
            Err(GameDataError::UnknownItem { kind, name }) => {
                assert_eq!(kind, RecordKind::Recipe);
                assert_eq!(name, "no-such-item");
            }
            other => panic!("Expected UnknownItem, got {:?}", other),
        }
    }

    #[test]
    fn test_records_label_as_items() {
        use engine::{item, ToDisplayable};
        let data = GameData::from_json_str(SAMPLE).unwrap();
        let belt = data.belt("transport-belt").unwrap();
        assert_eq!(belt.to_displayable(), item("transport-belt"));
    }
}
