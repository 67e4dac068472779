//! Default baseline parsing.
//!
//! The baseline is a single `head:tail` line. Everything in `tail` is an
//! atomic op. Items in `head` are classified one by one: those that parse as
//! an op join the base ops (after the tail's), the rest are preset
//! composition names.
//!
//! ```text
//! Smile,Hair>Short,Idle:Body+Base,Eyes>Open
//! ```
//!
//! gives presets `[Smile, Idle]` and base ops
//! `[Body+Base, Eyes>Open, Hair>Short]`.

use crate::types::DefaultBaseline;

use super::op::{parse_atomic_op, split_list};

/// Parse the default-composition line.
pub fn parse_default_baseline(text: &str) -> DefaultBaseline {
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let (head, tail) = line.split_once(':').unwrap_or((line, ""));

    let mut base_ops: Vec<String> = split_list(tail).map(String::from).collect();
    let mut preset_names = Vec::new();

    for item in split_list(head) {
        if parse_atomic_op(item).is_some() {
            base_ops.push(item.to_string());
        } else {
            preset_names.push(item.to_string());
        }
    }

    DefaultBaseline::new(preset_names, base_ops)
}
