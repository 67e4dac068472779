//! Characters: a catalog, a composition registry and a baseline, loaded
//! together and never modified afterwards.
//!
//! # Example
//!
//! ```ignore
//! use compo::character::{Character, CharacterSources, Workbench};
//!
//! let hero = Character::from_sources(CharacterSources {
//!     name: "hero".into(),
//!     catalog: layers_txt,
//!     compositions: compositions_txt,
//!     baseline: default_txt,
//! });
//!
//! let mut bench = Workbench::new(hero.into());
//! bench.toggle_composition("Blink");
//! println!("{}", bench.expression()?);
//! ```

mod workbench;

use crate::error::Result;
use crate::parser::{
    parse_catalog_with_skipped, parse_composition_registry_with_skipped, parse_default_baseline,
    parse_expression, Expression, SkippedLine,
};
use crate::registry::CompositionRegistry;
use crate::resolve::Resolver;
use crate::synth::synthesize;
use crate::types::{ActivationMap, ActiveMacroSet, DefaultBaseline, LayerCatalog, ManualOverrides};

pub use workbench::Workbench;

/// Raw text blobs for one character, as fetched by the caller.
#[derive(Debug, Clone, Default)]
pub struct CharacterSources {
    pub name: String,
    pub catalog: String,
    pub compositions: String,
    pub baseline: String,
}

/// One loaded character.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    catalog: LayerCatalog,
    registry: CompositionRegistry,
    baseline: DefaultBaseline,

    /// Catalog lines the parser dropped.
    skipped_layers: Vec<SkippedLine>,

    /// Registry lines the parser dropped.
    skipped_compositions: Vec<SkippedLine>,
}

impl Character {
    /// Parse all three sources into a character.
    pub fn from_sources(sources: CharacterSources) -> Self {
        let (catalog, skipped_layers) = parse_catalog_with_skipped(&sources.catalog);
        let (registry, skipped_compositions) =
            parse_composition_registry_with_skipped(&sources.compositions);
        let baseline = parse_default_baseline(&sources.baseline);

        Self {
            name: sources.name,
            catalog,
            registry,
            baseline,
            skipped_layers,
            skipped_compositions,
        }
    }

    /// Assemble a character from already-parsed parts.
    pub fn new(
        name: impl Into<String>,
        catalog: LayerCatalog,
        registry: CompositionRegistry,
        baseline: DefaultBaseline,
    ) -> Self {
        Self {
            name: name.into(),
            catalog,
            registry,
            baseline,
            skipped_layers: Vec::new(),
            skipped_compositions: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &LayerCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &CompositionRegistry {
        &self.registry
    }

    pub fn baseline(&self) -> &DefaultBaseline {
        &self.baseline
    }

    pub fn skipped_layers(&self) -> &[SkippedLine] {
        &self.skipped_layers
    }

    pub fn skipped_compositions(&self) -> &[SkippedLine] {
        &self.skipped_compositions
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog, &self.registry, &self.baseline)
    }

    /// Compositions active when the character is first selected.
    pub fn presets(&self) -> ActiveMacroSet {
        self.baseline.preset_names.iter().map(String::as_str).collect()
    }

    pub fn parse_expression(&self, text: &str) -> Expression {
        parse_expression(text, &self.registry)
    }

    pub fn resolve(
        &self,
        active: &ActiveMacroSet,
        overrides: &ManualOverrides,
    ) -> Result<ActivationMap> {
        self.resolver().resolve(active, overrides)
    }

    /// Resolve an expression as typed or shared by a user.
    pub fn resolve_expression(&self, text: &str) -> Result<ActivationMap> {
        let expr = self.parse_expression(text);
        self.resolve(&expr.macros, &expr.overrides(&self.catalog))
    }

    pub fn synthesize(&self, state: &ActivationMap, active: &ActiveMacroSet) -> Result<String> {
        synthesize(&self.resolver(), state, active)
    }

    /// Rewrite an expression into its canonical minimal form.
    pub fn canonicalize(&self, text: &str) -> Result<String> {
        let expr = self.parse_expression(text);
        let state = self.resolve(&expr.macros, &expr.overrides(&self.catalog))?;
        self.synthesize(&state, &expr.macros)
    }
}
