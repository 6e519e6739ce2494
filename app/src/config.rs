//! FILENAME: app/src/config.rs
//! PURPOSE: Parameters of the generated tables (which recipes, which item
//!          categories, which storage sizes). Loaded from JSON; every field
//!          falls back to the wiki's standard set.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// A named list of items shown together in the stack size table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl ItemCategory {
    fn new(name: &str, items: &[&str]) -> Self {
        ItemCategory {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    /// Recipes in the crafting table, in display order.
    pub crafting_recipes: Vec<String>,

    /// Categories of the stack size table, in display order.
    pub stack_size_categories: Vec<ItemCategory>,

    /// Row values of the storage table. `null` adds the slot count row.
    pub storage_slots: Vec<Option<u32>>,

    /// Items per slot assumed by the storage table.
    pub storage_stack_size: u32,

    /// Power drawn by one offshore pump / boiler / engine setup, in MW.
    pub steam_setup_megawatts: f64,
}

impl Default for TablesConfig {
    fn default() -> Self {
        TablesConfig {
            crafting_recipes: [
                "transport-belt",
                "fast-transport-belt",
                "express-transport-belt",
                "inserter",
                "rail",
                "assembling-machine-1",
                "assembling-machine-2",
                "electronic-circuit",
                "processing-unit",
                "advanced-circuit",
                "rocket-fuel",
                "low-density-structure",
                "rocket-control-unit",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            stack_size_categories: vec![
                ItemCategory::new("Ores", &["iron-ore", "copper-ore", "coal", "stone", "uranium-ore"]),
                ItemCategory::new(
                    "Smelted",
                    &["iron-plate", "steel-plate", "copper-plate", "stone-brick", "uranium-235", "uranium-238"],
                ),
                ItemCategory::new(
                    "Intermediates",
                    &[
                        "copper-cable",
                        "electronic-circuit",
                        "advanced-circuit",
                        "battery",
                        "science-pack-1",
                        "processing-unit",
                        "plastic-bar",
                        "iron-gear-wheel",
                    ],
                ),
                ItemCategory::new(
                    "Logistics",
                    &[
                        "transport-belt",
                        "pipe",
                        "rail",
                        "repair-pack",
                        "stone-wall",
                        "splitter",
                        "pipe-to-ground",
                        "rail-signal",
                        "train-stop",
                    ],
                ),
                ItemCategory::new(
                    "Power",
                    &[
                        "small-electric-pole",
                        "medium-electric-pole",
                        "big-electric-pole",
                        "substation",
                        "solar-panel",
                        "accumulator",
                        "small-lamp",
                    ],
                ),
                ItemCategory::new("Trains", &["cargo-wagon", "locomotive", "fluid-wagon"]),
                ItemCategory::new("Tiles", &["concrete", "hazard-concrete", "landfill"]),
                ItemCategory::new(
                    "Ammo (all tiers)",
                    &["piercing-rounds-magazine", "shotgun-shell", "cannon-shell", "explosive-rocket"],
                ),
                ItemCategory::new("Other Weapons", &["grenade", "cluster-grenade", "atomic-bomb", "land-mine"]),
                ItemCategory::new("Rocket Parts", &["low-density-structure", "rocket-control-unit", "rocket-fuel"]),
            ],
            storage_slots: vec![
                Some(1),
                Some(2),
                Some(4),
                Some(8),
                Some(16),
                Some(32),
                Some(64),
                Some(128),
                None,
            ],
            storage_stack_size: 100,
            // 20 boilers at 1.8 MW each
            steam_setup_megawatts: 36.0,
        }
    }
}

impl TablesConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: TablesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.steam_setup_megawatts.is_finite() || self.steam_setup_megawatts <= 0.0 {
            return Err(AppError::InvalidConfig(format!(
                "steam_setup_megawatts must be positive, got {}",
                self.steam_setup_megawatts
            )));
        }
        if self.storage_stack_size == 0 {
            return Err(AppError::InvalidConfig(
                "storage_stack_size must be positive".to_string(),
            ));
        }
        if let Some(category) = self.stack_size_categories.iter().find(|c| c.items.is_empty()) {
            return Err(AppError::InvalidConfig(format!(
                "stack size category '{}' has no items",
                category.name
            )));
        }
        Ok(())
    }
}
