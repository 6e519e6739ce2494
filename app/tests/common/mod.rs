//! FILENAME: tests/common/mod.rs
//! Fixtures for the ratio table integration tests.

use app_lib::{bundled_game_data, build_registry, TablesConfig};
use gamedata::GameData;
use render::TableRegistry;
use table_engine::TableView;

/// Bundled game data plus the default table parameters.
pub struct TestHarness {
    pub data: GameData,
    pub config: TablesConfig,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            data: bundled_game_data().expect("bundled game data should load"),
            config: TablesConfig::default(),
        }
    }

    /// Builds every table in the catalog.
    pub fn build_all(&self) -> TableRegistry {
        build_registry::<&str>(&self.data, &self.config, &[]).expect("catalog should build")
    }

    /// Builds a single table and returns its view.
    pub fn build_one(&self, id: &str) -> TableView {
        let registry = build_registry(&self.data, &self.config, &[id]).expect("table should build");
        registry.get(id).cloned().expect("table should be registered")
    }
}

/// Plain text of the cell at (row, col).
pub fn cell_text(view: &TableView, row: usize, col: usize) -> String {
    view.get(row, col).map(|cell| cell.to_string()).unwrap_or_default()
}
