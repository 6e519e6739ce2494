//! FILENAME: core/render/src/registry.rs
//! PURPOSE: Collects finished tables under unique ids, in registration order.
//! CONTEXT: The `basic_table`, `double_row_header_table` and `static_table`
//! entry points calculate a definition and register the resulting view.

use log::debug;
use table_engine::{
    calculate_double_header_table, calculate_static_table, calculate_table,
    DoubleHeaderDefinition, StaticDefinition, TableDefinition, TableView,
};

use crate::error::RenderError;

#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<TableView>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished view. Ids must be unique within a document.
    pub fn register(&mut self, view: TableView) -> Result<(), RenderError> {
        if self.get(&view.table).is_some() {
            return Err(RenderError::DuplicateTable(view.table));
        }
        debug!("Registered table '{}' ({} x {})", view.table, view.row_count, view.col_count);
        self.tables.push(view);
        Ok(())
    }

    pub fn basic_table<R, C>(&mut self, definition: TableDefinition<'_, R, C>) -> Result<(), RenderError> {
        let view = calculate_table(&definition)?;
        self.register(view)
    }

    pub fn double_row_header_table<R1, R2, C>(
        &mut self,
        definition: DoubleHeaderDefinition<'_, R1, R2, C>,
    ) -> Result<(), RenderError> {
        let view = calculate_double_header_table(&definition)?;
        self.register(view)
    }

    pub fn static_table(&mut self, definition: StaticDefinition) -> Result<(), RenderError> {
        let view = calculate_static_table(&definition)?;
        self.register(view)
    }

    pub fn get(&self, table: &str) -> Option<&TableView> {
        self.tables.iter().find(|view| view.table == table)
    }

    pub fn tables(&self) -> &[TableView] {
        &self.tables
    }

    /// Keeps only the tables whose id is in `ids`; an empty filter keeps all.
    pub fn retain_ids<S: AsRef<str>>(&mut self, ids: &[S]) {
        if ids.is_empty() {
            return;
        }
        self.tables
            .retain(|view| ids.iter().any(|id| id.as_ref() == view.table));
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{fixed, text};
    use table_engine::row;

    #[test]
    fn test_register_in_order_and_reject_duplicates() {
        let mut registry = TableRegistry::new();
        registry
            .basic_table(TableDefinition::new("a", vec![1u32], vec![2u32], |r, c, _, _| {
                Ok(fixed(*r as f64 / *c as f64))
            }))
            .unwrap();
        registry
            .static_table(StaticDefinition::new("b", vec![row!["x"], row![1]]))
            .unwrap();

        let ids: Vec<&str> = registry.tables().iter().map(|v| v.table.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let err = registry
            .static_table(StaticDefinition::new("a", vec![row![text("dup")]]))
            .unwrap_err();
        assert!(matches!(err, RenderError::DuplicateTable(id) if id == "a"));
    }

    #[test]
    fn test_table_errors_surface() {
        let mut registry = TableRegistry::new();
        let err = registry
            .basic_table(TableDefinition::new("fails", vec![1u32], vec![1u32], |_, _, _, _| {
                Err("lookup failed".into())
            }))
            .unwrap_err();
        assert!(matches!(err, RenderError::Table(_)));
        assert!(err.to_string().contains("lookup failed"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_retain_ids() {
        let mut registry = TableRegistry::new();
        registry.static_table(StaticDefinition::new("a", vec![row!["x"]])).unwrap();
        registry.static_table(StaticDefinition::new("b", vec![row!["y"]])).unwrap();

        registry.retain_ids(&["b"]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("b").is_some());

        registry.retain_ids::<&str>(&[]);
        assert_eq!(registry.len(), 1);
    }
}
