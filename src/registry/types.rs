//! Composition definitions and part classification.

use std::fmt;

use crate::types::AtomicOp;

/// A named, ordered bundle of parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Composition name (unique within a registry).
    pub name: String,

    /// Raw parts, in listed order. Each is either another composition's
    /// name or an atomic-op token.
    pub parts: Vec<String>,
}

impl Composition {
    pub fn new(name: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }
}

/// What a raw part (or expression token) turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part<'a> {
    /// The token names a composition in the registry.
    Composition(&'a Composition),

    /// The token parsed as an atomic op.
    Op(AtomicOp),

    /// Neither; skipped wherever it occurs.
    Unknown,
}

impl fmt::Display for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Composition(c) => write!(f, "composition:{}", c.name),
            Part::Op(op) => write!(f, "op:{}", op),
            Part::Unknown => write!(f, "unknown"),
        }
    }
}
