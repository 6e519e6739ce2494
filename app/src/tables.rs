//! FILENAME: app/src/tables.rs
//! PURPOSE: The wiki's table catalog. Each entry derives one table from the
//!          game data and registers it under its id.
//! CONTEXT: Every value comes from a data lookup; an unknown name fails the
//!          whole run instead of producing a table with a hole in it.

use engine::{ceil, checked, fixed, group, integer, item_group, large, text, Displayable, ToDisplayable};
use gamedata::{GameData, Recipe};
use log::info;
use render::TableRegistry;
use table_engine::{group_by, DoubleHeaderDefinition, Group, StaticDefinition, TableDefinition};

use crate::config::TablesConfig;
use crate::error::AppError;

type BuildFn = fn(&mut TableRegistry, &GameData, &TablesConfig) -> Result<(), AppError>;

/// Table ids in document order, with the function that builds each.
pub const CATALOG: &[(&str, BuildFn)] = &[
    ("belt-throughput", belt_throughput),
    ("crafting", crafting),
    ("steam-advanced", steam_advanced),
    ("stack-sizes", stack_sizes),
    ("storage", storage),
];

pub fn table_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(id, _)| *id)
}

/// Builds the selected tables (all of them when `only` is empty) in
/// catalog order.
pub fn build_registry<S: AsRef<str>>(
    data: &GameData,
    config: &TablesConfig,
    only: &[S],
) -> Result<TableRegistry, AppError> {
    for wanted in only {
        let wanted: &str = wanted.as_ref();
        if !table_ids().any(|known| known == wanted) {
            return Err(AppError::UnknownTable(wanted.to_string()));
        }
    }

    let mut registry = TableRegistry::new();
    for (id, build) in CATALOG {
        let selected = only.is_empty() || only.iter().any(|wanted| wanted.as_ref() == *id);
        if selected {
            build(&mut registry, data, config)?;
        }
    }

    info!("Built {} tables", registry.len());
    Ok(registry)
}

// ============================================================================
// BELTS
// ============================================================================

/// Items per second on one lane and on both lanes of each belt tier.
fn belt_throughput(registry: &mut TableRegistry, data: &GameData, _: &TablesConfig) -> Result<(), AppError> {
    let definition = TableDefinition::new(
        "belt-throughput",
        data.belts.iter().collect(),
        vec!["One Lane", "Both Lanes"],
        |belt, _, _, ci| {
            let lanes = (ci + 1) as f64;
            Ok(fixed(checked(belt.throughput * lanes / 2.0)?))
        },
    )
    .origin(text("Belt"));

    registry.basic_table(definition)?;
    Ok(())
}

// ============================================================================
// ASSEMBLERS AND BELTS
// ============================================================================

/// Header for a group of recipes sharing a crafting time: "0.5s" plus the items.
fn recipe_group_header(group_row: &Group<f64, &Recipe>) -> Displayable {
    group([
        text(format!("{}s", group_row.key.to_displayable())),
        item_group(group_row.items.iter().map(|r| r.name.as_str())),
    ])
}

/// Assemblers needed to fill a belt, per recipe crafting time.
fn crafting(registry: &mut TableRegistry, data: &GameData, config: &TablesConfig) -> Result<(), AppError> {
    let recipes = data.recipes.select(&config.crafting_recipes)?;

    let mut recipe_groups = group_by(recipes, |recipe| recipe.energy);
    recipe_groups.sort_by(|a, b| a.key.total_cmp(&b.key));

    let definition = DoubleHeaderDefinition::new(
        "crafting",
        recipe_groups,
        data.belts.iter().collect(),
        data.assemblers.iter().collect(),
        |recipes, belt, assembler| {
            let machines = checked(belt.throughput * (recipes.key / assembler.speed))?;
            Ok(ceil(machines))
        },
    )
    .row1_header(recipe_group_header)
    .origins("Recipe / Speed", "Belt");

    registry.double_row_header_table(definition)?;
    Ok(())
}

// ============================================================================
// STEAM POWER
// ============================================================================

/// Steam setups one full belt of each fuel keeps running.
fn steam_advanced(registry: &mut TableRegistry, data: &GameData, config: &TablesConfig) -> Result<(), AppError> {
    let setup_megawatts = config.steam_setup_megawatts;

    let definition = TableDefinition::new(
        "steam-advanced",
        data.fuels.iter().collect(),
        data.belts.iter().collect(),
        move |fuel, belt, _, _| {
            let megawatts_provided = fuel.energy * belt.throughput;
            Ok(fixed(checked(megawatts_provided / setup_megawatts)?))
        },
    )
    .origin(text(""));

    registry.basic_table(definition)?;
    Ok(())
}

// ============================================================================
// STACK SIZES
// ============================================================================

/// One row per (category, stack size), items with equal stack size merged.
fn stack_sizes(registry: &mut TableRegistry, data: &GameData, config: &TablesConfig) -> Result<(), AppError> {
    let mut rows: Vec<Vec<Displayable>> = vec![table_engine::row!["Category", "Items", "Size"]];

    for category in &config.stack_size_categories {
        let items = data.items.select(&category.items)?;
        for size_group in group_by(items, |item| item.stack_size) {
            rows.push(vec![
                text(category.name.as_str()),
                item_group(size_group.items.iter().map(|item| item.name.as_str())),
                integer(size_group.key as f64),
            ]);
        }
    }

    registry.static_table(StaticDefinition::new("stack-sizes", rows))?;
    Ok(())
}

// ============================================================================
// STORAGE
// ============================================================================

/// Items held by N boxes of each kind; the last row shows slot counts.
fn storage(registry: &mut TableRegistry, data: &GameData, config: &TablesConfig) -> Result<(), AppError> {
    let stack_size = config.storage_stack_size as f64;

    let definition = TableDefinition::new(
        "storage",
        config.storage_slots.clone(),
        data.boxes.iter().collect(),
        move |boxes, storage_box, _, _| {
            Ok(match boxes {
                Some(count) => large(*count as f64 * storage_box.size as f64 * stack_size),
                None => integer(storage_box.size as f64),
            })
        },
    )
    .row_header(|boxes| match boxes {
        Some(count) => count.to_displayable(),
        None => text("(slots)"),
    })
    .origin(text("#"));

    registry.basic_table(definition)?;
    Ok(())
}
