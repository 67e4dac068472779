//! Atomic operations of the composition mini-language.
//!
//! - `Eyes+Open` - turn one layer on
//! - `Eyes-Open` - turn one layer off
//! - `Eyes>Open` - turn one layer on and every sibling off
//! - `Eyes-` - turn the whole group off

use std::fmt;

use super::layer::layer_id;

/// What an atomic operation does to its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Enable,
    Disable,
    Exclusive,
    ClearGroup,
}

/// One parsed instruction targeting a group (and optionally one layer in it).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicOp {
    pub group: String,
    /// Empty for `ClearGroup`.
    pub name: String,
    pub kind: OpKind,
}

impl AtomicOp {
    pub fn new(kind: OpKind, group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn enable(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(OpKind::Enable, group, name)
    }

    pub fn disable(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(OpKind::Disable, group, name)
    }

    pub fn exclusive(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(OpKind::Exclusive, group, name)
    }

    pub fn clear_group(group: impl Into<String>) -> Self {
        Self::new(OpKind::ClearGroup, group, "")
    }

    /// The single layer id this op names, if it targets one layer.
    pub fn target_id(&self) -> Option<String> {
        match self.kind {
            OpKind::ClearGroup => None,
            _ => Some(layer_id(&self.group, &self.name)),
        }
    }
}

impl fmt::Display for AtomicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OpKind::Enable => write!(f, "{}+{}", self.group, self.name),
            OpKind::Disable => write!(f, "{}-{}", self.group, self.name),
            OpKind::Exclusive => write!(f, "{}>{}", self.group, self.name),
            OpKind::ClearGroup => write!(f, "{}-", self.group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tokens() {
        assert_eq!(AtomicOp::enable("Eyes", "Open").to_string(), "Eyes+Open");
        assert_eq!(AtomicOp::disable("Eyes", "Open").to_string(), "Eyes-Open");
        assert_eq!(AtomicOp::exclusive("Eyes", "Open").to_string(), "Eyes>Open");
        assert_eq!(AtomicOp::clear_group("Eyes").to_string(), "Eyes-");
    }

    #[test]
    fn test_target_id() {
        assert_eq!(
            AtomicOp::exclusive("Mouth", "Grin").target_id().as_deref(),
            Some("Mouth/Grin")
        );
        assert_eq!(AtomicOp::clear_group("Mouth").target_id(), None);
    }
}
