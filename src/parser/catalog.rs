//! Layer catalog parsing.
//!
//! One layer per line, `group:name:order`. Lines with a missing field or a
//! non-integer order are dropped.

use crate::types::{Layer, LayerCatalog};

use super::SkippedLine;

/// Parse catalog text into a catalog sorted by render order.
pub fn parse_catalog(text: &str) -> LayerCatalog {
    parse_catalog_with_skipped(text).0
}

/// Parse catalog text, also returning the lines that were dropped.
pub fn parse_catalog_with_skipped(text: &str) -> (LayerCatalog, Vec<SkippedLine>) {
    let mut layers = Vec::new();
    let mut skipped = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_layer_line(line) {
            Some(layer) => layers.push(layer),
            None => skipped.push(SkippedLine::new(i + 1, line)),
        }
    }

    (LayerCatalog::new(layers), skipped)
}

fn parse_layer_line(line: &str) -> Option<Layer> {
    let mut fields = line.splitn(3, ':').map(str::trim);

    let group = fields.next().filter(|s| !s.is_empty())?;
    let name = fields.next().filter(|s| !s.is_empty())?;
    let order = fields.next()?.parse::<i64>().ok()?;

    Some(Layer::new(group, name, order))
}
