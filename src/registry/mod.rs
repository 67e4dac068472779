//! Composition registry.
//!
//! The registry maps composition names to their parts and decides, per
//! part, whether it refers to another composition or is an atomic op.
//!
//! # Example
//!
//! ```ignore
//! use compo::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! builder.add_composition("Blink", ["Eyes>Closed".to_string()]);
//! builder.add_composition("Sleepy", ["Blink".to_string(), "Mouth>Yawn".to_string()]);
//!
//! let registry = builder.build();
//! let graph = registry.graph();
//! ```

mod graph;
pub mod types;

use indexmap::IndexMap;

use crate::parser::parse_atomic_op;

pub use graph::CompositionGraph;
pub use types::{Composition, Part};

/// Mapping from composition name to its parts.
///
/// Immutable after construction - use `RegistryBuilder` to create one.
/// Iteration follows definition order.
#[derive(Debug, Clone, Default)]
pub struct CompositionRegistry {
    compositions: IndexMap<String, Composition>,

    /// Names defined more than once (the last definition is kept).
    duplicates: Vec<String>,
}

impl CompositionRegistry {
    /// Get a composition by name.
    pub fn get(&self, name: &str) -> Option<&Composition> {
        self.compositions.get(name)
    }

    /// Check whether a name is a registry key.
    pub fn contains(&self, name: &str) -> bool {
        self.compositions.contains_key(name)
    }

    /// Classify a raw part or expression token.
    ///
    /// Registry keys take precedence; only tokens that are not composition
    /// names are parsed as atomic ops.
    pub fn classify(&self, token: &str) -> Part<'_> {
        if let Some(composition) = self.get(token) {
            return Part::Composition(composition);
        }
        match parse_atomic_op(token) {
            Some(op) => Part::Op(op),
            None => Part::Unknown,
        }
    }

    /// All composition names, in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.compositions.keys().map(|s| s.as_str())
    }

    /// All compositions, in definition order.
    pub fn compositions(&self) -> impl Iterator<Item = &Composition> {
        self.compositions.values()
    }

    /// Names that were defined more than once.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Build the composition reference graph.
    pub fn graph(&self) -> CompositionGraph {
        let mut graph = CompositionGraph::new();
        for composition in self.compositions() {
            graph.register(&composition.name);
            for part in &composition.parts {
                if self.contains(part) {
                    graph.add_reference(&composition.name, part);
                }
            }
        }
        graph
    }

    /// Get the number of compositions.
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }
}

/// Builder for constructing a CompositionRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    compositions: IndexMap<String, Composition>,
    duplicates: Vec<String>,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a composition. A later definition replaces an earlier one but
    /// keeps its position.
    pub fn add_composition(
        &mut self,
        name: impl Into<String>,
        parts: impl IntoIterator<Item = String>,
    ) -> &mut Self {
        let name = name.into();
        let composition = Composition::new(name.clone(), parts.into_iter().collect());
        if self.compositions.insert(name.clone(), composition).is_some() {
            self.duplicates.push(name);
        }
        self
    }

    /// Build the registry.
    pub fn build(self) -> CompositionRegistry {
        CompositionRegistry {
            compositions: self.compositions,
            duplicates: self.duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AtomicOp;

    fn parts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert!(registry.graph().is_empty());
    }

    #[test]
    fn test_classify() {
        let mut builder = RegistryBuilder::new();
        builder.add_composition("Blink", parts(&["Eyes>Closed"]));
        let registry = builder.build();

        assert!(matches!(registry.classify("Blink"), Part::Composition(c) if c.name == "Blink"));
        assert_eq!(
            registry.classify("Eyes+Open"),
            Part::Op(AtomicOp::enable("Eyes", "Open"))
        );
        assert_eq!(registry.classify("Wink"), Part::Unknown);
    }

    #[test]
    fn test_registry_key_beats_op_syntax() {
        let mut builder = RegistryBuilder::new();
        builder.add_composition("Half-Smile", parts(&["Mouth>Smirk"]));
        let registry = builder.build();

        assert!(matches!(registry.classify("Half-Smile"), Part::Composition(_)));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_composition("Blink", parts(&["Eyes>Closed"]))
            .add_composition("Wave", parts(&["Arm>Up"]))
            .add_composition("Blink", parts(&["Eyes>Shut"]));
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Blink").unwrap().parts, parts(&["Eyes>Shut"]));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Blink", "Wave"]);
        assert_eq!(registry.duplicates(), &["Blink".to_string()]);
    }

    #[test]
    fn test_graph_only_links_compositions() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_composition("Blink", parts(&["Eyes>Closed"]))
            .add_composition("Sleepy", parts(&["Blink", "Mouth>Yawn", "Missing"]));
        let graph = builder.build().graph();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.references_of("Sleepy").collect::<Vec<_>>(), vec!["Blink"]);
        assert_eq!(graph.referenced_by("Blink").collect::<Vec<_>>(), vec!["Sleepy"]);
    }
}
