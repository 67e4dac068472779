//! Composition reference graph.
//!
//! Tracks which compositions include which other compositions, for
//! dependency listings and up-front cycle detection.

use indexmap::{IndexMap, IndexSet};

/// A graph of composition-to-composition references.
#[derive(Debug, Default)]
pub struct CompositionGraph {
    /// Adjacency list: composition -> compositions it includes.
    references: IndexMap<String, IndexSet<String>>,

    /// Reverse adjacency list: composition -> compositions that include it.
    referenced_by: IndexMap<String, IndexSet<String>>,

    /// All known compositions (including those with no references).
    nodes: IndexSet<String>,
}

impl CompositionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a composition in the graph (even if it references nothing).
    pub fn register(&mut self, name: &str) {
        self.nodes.insert(name.to_string());
    }

    /// Add a reference: `from` includes `to`.
    pub fn add_reference(&mut self, from: &str, to: &str) {
        self.register(from);
        self.register(to);

        self.references
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());

        self.referenced_by
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string());
    }

    /// Compositions that `name` includes directly.
    pub fn references_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.references
            .get(name)
            .map(|s| s.iter())
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
    }

    /// Compositions that include `name` directly.
    pub fn referenced_by(&self, name: &str) -> impl Iterator<Item = &str> {
        self.referenced_by
            .get(name)
            .map(|s| s.iter())
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
    }

    /// All registered compositions, in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find every reference cycle reachable by depth-first search.
    ///
    /// Each cycle is returned as a closed path, e.g. `[A, B, A]`. Cycles
    /// are found from the first node (in registration order) that reaches
    /// them, so a self-reference is `[A, A]`. The search keeps its own frame
    /// stack, so reference depth is limited only by the graph size.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut visited = IndexSet::new();
        let mut cycles = Vec::new();

        for start in &self.nodes {
            if !visited.contains(start.as_str()) {
                self.dfs_cycles(start, &mut visited, &mut cycles);
            }
        }

        cycles
    }

    fn dfs_cycles<'a>(
        &'a self,
        start: &'a str,
        visited: &mut IndexSet<&'a str>,
        cycles: &mut Vec<Vec<String>>,
    ) {
        // (node, index of the next reference to follow)
        let mut frames: Vec<(&'a str, usize)> = vec![(start, 0)];
        let mut path: IndexSet<&'a str> = IndexSet::new();
        visited.insert(start);
        path.insert(start);

        while let Some(frame) = frames.last_mut() {
            let (node, next) = *frame;
            let Some(target) = self.reference_at(node, next) else {
                frames.pop();
                path.pop();
                continue;
            };
            frame.1 += 1;

            if let Some(pos) = path.get_index_of(target) {
                let mut cycle: Vec<String> = path.iter().skip(pos).map(|s| s.to_string()).collect();
                cycle.push(target.to_string());
                cycles.push(cycle);
            } else if visited.insert(target) {
                path.insert(target);
                frames.push((target, 0));
            }
        }
    }

    fn reference_at(&self, name: &str, index: usize) -> Option<&str> {
        self.references
            .get(name)
            .and_then(|refs| refs.get_index(index))
            .map(|s| s.as_str())
    }
}
