//! Parsers for compo's line-oriented text formats.
//!
//! Every parser here is best-effort: malformed lines are dropped and
//! unparseable tokens skipped, never reported as errors. Use the
//! `*_with_skipped` variants to find out what was dropped.
//!
//! # Formats
//!
//! - Catalog: `group:name:order` per line
//! - Compositions: `name:part,part,...` per line
//! - Baseline: one `head:tail` line
//! - Expressions: `part,part,...`
//!
//! # Usage
//!
//! ```ignore
//! use compo::parser::{parse_catalog, parse_composition_registry, parse_expression};
//!
//! let catalog = parse_catalog(&layers_txt);
//! let registry = parse_composition_registry(&compositions_txt);
//! let expr = parse_expression("Smile,Mouth+Frown", &registry);
//! ```

mod baseline;
mod catalog;
mod composition;
mod expression;
mod op;

use std::fmt;

pub use baseline::parse_default_baseline;
pub use catalog::{parse_catalog, parse_catalog_with_skipped};
pub use composition::{parse_composition_registry, parse_composition_registry_with_skipped};
pub use expression::{parse_expression, Expression, DEFAULT_EXPRESSION};
pub use op::{parse_atomic_op, split_list};

/// A source line dropped by a best-effort parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

impl SkippedLine {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.text)
    }
}
