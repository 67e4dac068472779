//! Activation state: which layers are on, which compositions are toggled,
//! and which layers the user has pinned by hand.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::layer::{Layer, LayerCatalog};

/// Mapping from layer id to on/off. Absent ids are off.
///
/// May contain ids that are not in the catalog (stale or misspelled
/// targets); catalog-based accessors ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivationMap {
    entries: BTreeMap<String, bool>,
}

impl ActivationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a layer is on.
    pub fn is_on(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Get the explicit entry for an id, if any.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    pub fn set(&mut self, id: impl Into<String>, on: bool) {
        self.entries.insert(id.into(), on);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, &on)| (id.as_str(), on))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog layers that are on, in render order.
    pub fn active_layers<'a>(&self, catalog: &'a LayerCatalog) -> Vec<&'a Layer> {
        catalog
            .layers()
            .iter()
            .filter(|layer| self.is_on(&layer.id))
            .collect()
    }

    /// Check that both maps turn on the same catalog layers.
    pub fn same_layers(&self, other: &ActivationMap, catalog: &LayerCatalog) -> bool {
        catalog.ids().all(|id| self.is_on(id) == other.is_on(id))
    }
}

impl FromIterator<(String, bool)> for ActivationMap {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Sparse user edits, authoritative over computed state.
///
/// Keeps insertion order so the edit history reads back the way it was made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManualOverrides {
    entries: IndexMap<String, bool>,
}

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a layer on or off. Re-pinning keeps the original position.
    pub fn set(&mut self, id: impl Into<String>, on: bool) {
        self.entries.insert(id.into(), on);
    }

    /// Remove a pin, returning its previous value.
    pub fn remove(&mut self, id: &str) -> Option<bool> {
        self.entries.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, &on)| (id.as_str(), on))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, bool)> for ManualOverrides {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Composition names currently toggled on, in the order they were enabled.
///
/// Iteration order decides which composition wins a conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveMacroSet {
    names: IndexSet<String>,
}

impl ActiveMacroSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name at the end. Returns false if it was already active.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a name, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.shift_remove(name)
    }

    /// Flip a name on or off. Returns the new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveMacroSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
