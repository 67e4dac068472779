//! Core domain types for compo.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Layer` / `LayerCatalog` - the addressable layers of one character
//! - `AtomicOp` - one instruction of the composition mini-language
//! - `DefaultBaseline` - presets and ops applied before anything else
//! - `ActivationMap`, `ManualOverrides`, `ActiveMacroSet` - resolution state

mod baseline;
mod layer;
mod op;
mod state;

pub use baseline::DefaultBaseline;
pub use layer::{layer_id, Layer, LayerCatalog};
pub use op::{AtomicOp, OpKind};
pub use state::{ActivationMap, ActiveMacroSet, ManualOverrides};
