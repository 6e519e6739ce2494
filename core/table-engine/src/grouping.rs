//! FILENAME: core/table-engine/src/grouping.rs
//! Grouping - Stable partition of records by a derived key.
//!
//! Groups come out in the order their key was first seen, and records keep
//! their original relative order inside each group. Two strategies with the
//! same observable output are provided:
//! - `group_by`: linear scan over the groups seen so far (`K: PartialEq`)
//! - `group_by_hashed`: hash lookup for larger inputs (`K: Hash + Eq`)

use std::hash::{Hash, Hasher};

use engine::{Displayable, ToDisplayable};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A key together with every record that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Number of records in the group. Never zero for groups produced here.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// A group labels itself with its key when used as a table axis.
impl<K: ToDisplayable, T> ToDisplayable for Group<K, T> {
    fn to_displayable(&self) -> Displayable {
        self.key.to_displayable()
    }
}

/// Partitions `items` by `key_fn`, comparing keys by value (`PartialEq`).
///
/// Keys that are not equal to themselves (`f64::NAN`) never match an
/// existing group, so each such record ends up alone in its own group.
pub fn group_by<T, K, I, F>(items: I, key_fn: F) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.items.push(item),
            None => groups.push(Group {
                key,
                items: vec![item],
            }),
        }
    }

    groups
}

/// Same contract as [`group_by`], with O(1) average key lookup.
pub fn group_by_hashed<T, K, I, F>(items: I, key_fn: F) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
{
    let mut positions: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match positions.get(&key) {
            Some(&index) => groups[index].items.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

// ============================================================================
// FLOAT KEYS
// ============================================================================

/// Hashable wrapper for numeric keys such as recipe crafting times.
/// All NaN values compare equal to each other, and 0.0 equals -0.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FloatKey(pub f64);

impl FloatKey {
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            true
        } else {
            self.0 == other.0
        }
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            u64::MAX.hash(state);
        } else if self.0 == 0.0 {
            0u64.hash(state);
        } else {
            self.0.to_bits().hash(state);
        }
    }
}

impl ToDisplayable for FloatKey {
    fn to_displayable(&self) -> Displayable {
        self.0.to_displayable()
    }
}
