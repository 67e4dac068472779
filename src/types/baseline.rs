//! Default composition baseline.

/// The macro-independent starting point of a character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultBaseline {
    /// Compositions switched on when the character is first selected.
    pub preset_names: Vec<String>,

    /// Raw atomic-op tokens applied before any composition.
    pub base_ops: Vec<String>,
}

impl DefaultBaseline {
    pub fn new(preset_names: Vec<String>, base_ops: Vec<String>) -> Self {
        Self {
            preset_names,
            base_ops,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preset_names.is_empty() && self.base_ops.is_empty()
    }
}
