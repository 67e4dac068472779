//! Layer catalog types.
//!
//! A character is drawn from a fixed list of layers. Each layer belongs to a
//! group (e.g. `Eyes`) and is addressed by `group/name`.
//!
//! # Example
//!
//! ```text
//! Body:Base:0
//! Eyes:Open:10
//! Eyes:Closed:10
//! Mouth:Grin:20
//! ```

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use serde::Serialize;

/// One addressable visual layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    /// Group the layer belongs to.
    pub group: String,

    /// Layer name, unique within its group.
    pub name: String,

    /// Render order (ascending draws first). Not used for resolution.
    pub order: i64,

    /// Catalog-unique identifier, always `group/name`.
    pub id: String,
}

impl Layer {
    /// Create a new layer, deriving its id from group and name.
    pub fn new(group: impl Into<String>, name: impl Into<String>, order: i64) -> Self {
        let group = group.into();
        let name = name.into();
        let id = layer_id(&group, &name);
        Self {
            group,
            name,
            order,
            id,
        }
    }
}

/// Build the `group/name` identifier for a layer.
pub fn layer_id(group: &str, name: &str) -> String {
    format!("{}/{}", group, name)
}

/// Immutable list of layers for one character, sorted by render order.
#[derive(Debug, Clone, Default)]
pub struct LayerCatalog {
    layers: Vec<Layer>,

    /// id -> position in `layers`.
    by_id: HashMap<String, usize>,

    /// group -> positions in `layers`, in render order.
    by_group: HashMap<String, Vec<usize>>,

    /// Ids that appeared more than once in the input (first one kept).
    duplicates: Vec<String>,
}

impl LayerCatalog {
    /// Build a catalog from layers.
    ///
    /// The first occurrence of an id wins; the result is stably sorted by
    /// `order`.
    pub fn new(layers: impl IntoIterator<Item = Layer>) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        let mut kept: Vec<Layer> = Vec::new();

        for layer in layers {
            if seen.insert(layer.id.clone()) {
                kept.push(layer);
            } else {
                duplicates.push(layer.id);
            }
        }

        kept.sort_by_key(|layer| layer.order);

        let mut by_id = HashMap::with_capacity(kept.len());
        let mut by_group: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, layer) in kept.iter().enumerate() {
            by_id.insert(layer.id.clone(), i);
            by_group.entry(layer.group.clone()).or_default().push(i);
        }

        Self {
            layers: kept,
            by_id,
            by_group,
            duplicates,
        }
    }

    /// All layers in render order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Get a layer by id.
    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.by_id.get(id).map(|&i| &self.layers[i])
    }

    /// Check whether an id names a catalog layer.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Layers of one group, in render order. Empty for unknown groups.
    pub fn group(&self, group: &str) -> impl Iterator<Item = &Layer> {
        self.by_group
            .get(group)
            .map(|positions| positions.iter())
            .into_iter()
            .flatten()
            .map(move |&i| &self.layers[i])
    }

    /// Check whether any layer belongs to `group`.
    pub fn has_group(&self, group: &str) -> bool {
        self.by_group.contains_key(group)
    }

    /// Distinct group names, in order of first appearance in render order.
    pub fn groups(&self) -> Vec<&str> {
        let groups: IndexSet<&str> = self.layers.iter().map(|layer| layer.group.as_str()).collect();
        groups.into_iter().collect()
    }

    /// All layer ids, in render order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|layer| layer.id.as_str())
    }

    /// Ids dropped because they were already defined.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
