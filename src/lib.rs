//! compo - Layered character composition
//!
//! A library for resolving composition expressions like
//! `Smile,Blink,Mouth+Frown` into the set of image layers a character
//! shows, and for synthesizing the shortest expression for a given state.

pub mod character;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod synth;
pub mod types;
pub mod validation;

pub use character::{Character, CharacterSources, Workbench};
pub use discovery::{discover, DiscoveryResult, Manifest, ScanResult};
pub use error::{CompoError, Result};
pub use parser::{
    parse_atomic_op, parse_catalog, parse_composition_registry, parse_default_baseline,
    parse_expression, Expression, DEFAULT_EXPRESSION,
};
pub use registry::{Composition, CompositionGraph, CompositionRegistry, Part, RegistryBuilder};
pub use resolve::{apply_op, Resolver};
pub use synth::synthesize;
pub use types::{
    ActivationMap, ActiveMacroSet, AtomicOp, DefaultBaseline, Layer, LayerCatalog,
    ManualOverrides, OpKind,
};
pub use validation::{validate_character, Diagnostic, Severity, ValidationResult};
