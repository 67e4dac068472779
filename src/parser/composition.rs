//! Composition registry parsing.
//!
//! One composition per line, `name:part,part,...`. Parts are kept as raw
//! strings; whether a part names another composition or is an atomic op is
//! decided at expansion time.

use crate::registry::{CompositionRegistry, RegistryBuilder};

use super::op::split_list;
use super::SkippedLine;

/// Parse registry text into a composition registry.
pub fn parse_composition_registry(text: &str) -> CompositionRegistry {
    parse_composition_registry_with_skipped(text).0
}

/// Parse registry text, also returning the lines that were dropped.
pub fn parse_composition_registry_with_skipped(
    text: &str,
) -> (CompositionRegistry, Vec<SkippedLine>) {
    let mut builder = RegistryBuilder::new();
    let mut skipped = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(':') {
            Some((name, parts)) if !name.trim().is_empty() => {
                builder.add_composition(name.trim(), split_list(parts).map(String::from));
            }
            _ => skipped.push(SkippedLine::new(i + 1, line)),
        }
    }

    (builder.build(), skipped)
}
