//! FILENAME: core/gamedata/src/catalog.rs
//! PURPOSE: Ordered, name-indexed storage for one record kind.
//! CONTEXT: Keeps file order (tables enumerate records in that order) and
//! offers O(1) lookups that fail loudly on unknown names.

use std::collections::HashMap;

use crate::error::GameDataError;
use crate::records::Record;

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Catalog<T> {
    /// Validates and indexes records, preserving their order.
    pub fn new(records: Vec<T>) -> Result<Self, GameDataError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let name = record.name();
            if name.trim().is_empty() {
                return Err(GameDataError::Invalid {
                    kind: T::KIND,
                    name: format!("#{}", position),
                    reason: "name is empty".to_string(),
                });
            }

            for (field, value) in record.numeric_fields() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GameDataError::Invalid {
                        kind: T::KIND,
                        name: name.to_string(),
                        reason: format!("{} must be a positive number, got {}", field, value),
                    });
                }
            }

            if index.insert(name.to_string(), position).is_some() {
                return Err(GameDataError::Duplicate {
                    kind: T::KIND,
                    name: name.to_string(),
                });
            }
        }

        Ok(Catalog { records, index })
    }

    /// Looks up a record by name; unknown names are an error, never a default.
    pub fn get(&self, name: &str) -> Result<&T, GameDataError> {
        self.find(name).ok_or_else(|| GameDataError::NotFound {
            kind: T::KIND,
            name: name.to_string(),
        })
    }

    pub fn find(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolves `names` in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&T>, GameDataError> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Catalog<T> {
    fn default() -> Self {
        Catalog {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
