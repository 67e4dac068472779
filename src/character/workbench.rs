//! Interactive editing state for one selected character.

use std::sync::Arc;

use crate::error::Result;
use crate::types::{ActivationMap, ActiveMacroSet, ManualOverrides};

use super::Character;

/// The user's working state: a character plus toggled compositions and
/// hand-pinned layers.
///
/// The character is shared behind an `Arc`; switching characters replaces
/// that single reference, so anyone still holding the old `Arc` keeps a
/// consistent catalog, registry and baseline.
#[derive(Debug, Clone)]
pub struct Workbench {
    character: Arc<Character>,
    active: ActiveMacroSet,
    overrides: ManualOverrides,
}

impl Workbench {
    /// Start editing a character with its default presets active.
    pub fn new(character: Arc<Character>) -> Self {
        let active = character.presets();
        Self {
            character,
            active,
            overrides: ManualOverrides::new(),
        }
    }

    pub fn character(&self) -> &Arc<Character> {
        &self.character
    }

    pub fn active(&self) -> &ActiveMacroSet {
        &self.active
    }

    pub fn overrides(&self) -> &ManualOverrides {
        &self.overrides
    }

    /// Toggle a composition on or off. Unknown names are ignored.
    ///
    /// Returns whether the composition is now active.
    pub fn toggle_composition(&mut self, name: &str) -> bool {
        if !self.character.registry().contains(name) {
            return false;
        }
        self.active.toggle(name)
    }

    /// Pin a layer on or off, regardless of what compositions say.
    pub fn set_override(&mut self, id: &str, on: bool) {
        self.overrides.set(id, on);
    }

    /// Unpin a layer, letting compositions decide again.
    pub fn clear_override(&mut self, id: &str) -> Option<bool> {
        self.overrides.remove(id)
    }

    /// Back to the character's presets with no pins.
    pub fn reset(&mut self) {
        self.active = self.character.presets();
        self.overrides.clear();
    }

    /// Switch to another character and reset the working state.
    pub fn switch_character(&mut self, character: Arc<Character>) {
        self.character = character;
        self.reset();
    }

    /// Replace the working state with what an expression describes.
    pub fn apply_expression(&mut self, text: &str) {
        let expr = self.character.parse_expression(text);
        self.overrides = expr.overrides(self.character.catalog());
        self.active = expr.macros;
    }

    /// Current activation state.
    pub fn state(&self) -> Result<ActivationMap> {
        self.character.resolve(&self.active, &self.overrides)
    }

    /// Canonical expression for the current state.
    pub fn expression(&self) -> Result<String> {
        let state = self.state()?;
        self.character.synthesize(&state, &self.active)
    }
}
