//! User and share expression parsing.
//!
//! An expression is a comma-separated list of composition names and atomic
//! ops, using the same grammar as registry parts:
//!
//! ```text
//! Smile,Blink,Mouth+Frown,Hat-
//! ```

use crate::registry::{CompositionRegistry, Part};
use crate::resolve::apply_op;
use crate::types::{ActivationMap, ActiveMacroSet, AtomicOp, LayerCatalog, ManualOverrides};

use super::op::split_list;

/// Text literal produced for an expression with nothing in it.
pub const DEFAULT_EXPRESSION: &str = "Default";

/// A parsed expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    /// Compositions named in the expression, in first-mention order.
    pub macros: ActiveMacroSet,

    /// Atomic ops, in listed order.
    pub ops: Vec<AtomicOp>,
}

impl Expression {
    /// Turn the expression's ops into manual overrides.
    ///
    /// The ops are applied in order to an empty map; the overrides hold
    /// exactly the layers they touched.
    pub fn overrides(&self, catalog: &LayerCatalog) -> ManualOverrides {
        let mut touched = ActivationMap::new();
        for op in &self.ops {
            apply_op(catalog, &mut touched, op);
        }
        touched
            .iter()
            .map(|(id, on)| (id.to_string(), on))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty() && self.ops.is_empty()
    }
}

/// Parse an expression against a registry.
///
/// Tokens that name a composition become macros; the rest are parsed as
/// atomic ops. Tokens that are neither (unknown names, the `Default`
/// literal) are dropped.
pub fn parse_expression(text: &str, registry: &CompositionRegistry) -> Expression {
    let mut expression = Expression::default();

    for token in split_list(text) {
        match registry.classify(token) {
            Part::Composition(composition) => {
                expression.macros.insert(composition.name.as_str());
            }
            Part::Op(op) => expression.ops.push(op),
            Part::Unknown => {}
        }
    }

    expression
}
