//! FILENAME: core/gamedata/src/records.rs
//! PURPOSE: One typed record per game entity kind.
//! CONTEXT: Every record is keyed by its internal item name; numeric fields
//! are checked once at load time so table code can use them directly.

use std::fmt;

use engine::{item, Displayable, ToDisplayable};
use serde::{Deserialize, Serialize};

/// The entity kinds present in a game data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Item,
    Recipe,
    Belt,
    Assembler,
    Fuel,
    StorageBox,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Item => "item",
            RecordKind::Recipe => "recipe",
            RecordKind::Belt => "belt",
            RecordKind::Assembler => "assembler",
            RecordKind::Fuel => "fuel",
            RecordKind::StorageBox => "storage box",
        };
        f.write_str(label)
    }
}

/// Common shape of every record: a kind, a unique name, and numeric fields
/// that must be finite and positive.
pub trait Record {
    const KIND: RecordKind;

    fn name(&self) -> &str;

    /// (field name, value) pairs validated at load time.
    fn numeric_fields(&self) -> Vec<(&'static str, f64)>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub stack_size: u32,
}

/// A crafting recipe; `energy` is the base crafting time in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub energy: f64,
}

/// A transport belt; `throughput` is items per second over both lanes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belt {
    pub name: String,
    pub throughput: f64,
}

/// A crafting machine; `speed` multiplies recipe crafting speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembler {
    pub name: String,
    pub speed: f64,
}

/// A burnable item; `energy` is its fuel value in MJ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    pub name: String,
    pub energy: f64,
}

/// A storage container; `size` is its slot count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageBox {
    pub name: String,
    pub size: u32,
}

impl Record for Item {
    const KIND: RecordKind = RecordKind::Item;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("stack_size", self.stack_size as f64)]
    }
}

impl Record for Recipe {
    const KIND: RecordKind = RecordKind::Recipe;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("energy", self.energy)]
    }
}

impl Record for Belt {
    const KIND: RecordKind = RecordKind::Belt;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("throughput", self.throughput)]
    }
}

impl Record for Assembler {
    const KIND: RecordKind = RecordKind::Assembler;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("speed", self.speed)]
    }
}

impl Record for Fuel {
    const KIND: RecordKind = RecordKind::Fuel;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("energy", self.energy)]
    }
}

impl Record for StorageBox {
    const KIND: RecordKind = RecordKind::StorageBox;

    fn name(&self) -> &str {
        &self.name
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("size", self.size as f64)]
    }
}

// Records label themselves with their item badge when used as a table axis.
macro_rules! impl_item_label {
    ($($ty:ty),*) => {
        $(
            impl ToDisplayable for $ty {
                fn to_displayable(&self) -> Displayable {
                    item(self.name.as_str())
                }
            }
        )*
    };
}

impl_item_label!(Item, Recipe, Belt, Assembler, Fuel, StorageBox);
