//! Atomic-op token parsing.

use crate::types::AtomicOp;

/// Operator characters, in no particular priority: the first one found wins.
const OPERATORS: [char; 3] = ['+', '-', '>'];

/// Parse one mini-language token into an atomic operation.
///
/// The token is split at the first `+`, `-` or `>`. Everything before is the
/// group, everything after is the layer name. A `-` with nothing after it
/// clears the whole group.
///
/// Returns `None` for tokens that do not describe an operation (no
/// operator, or an empty group); callers skip those.
pub fn parse_atomic_op(token: &str) -> Option<AtomicOp> {
    // A trailing '-' is itself an operator, so `Group-` lands in the
    // clear-group arm below.
    let pos = token.find(OPERATORS)?;

    let group = &token[..pos];
    let name = &token[pos + 1..];

    let op = match &token[pos..pos + 1] {
        "+" => AtomicOp::enable(group, name),
        ">" => AtomicOp::exclusive(group, name),
        _ if name.is_empty() => AtomicOp::clear_group(group),
        _ => AtomicOp::disable(group, name),
    };

    non_empty(op)
}

fn non_empty(op: AtomicOp) -> Option<AtomicOp> {
    if op.group.is_empty() {
        None
    } else {
        Some(op)
    }
}

/// Split a comma-separated list into trimmed, non-empty items.
pub fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|item| !item.is_empty())
}
