//! Expression synthesis.
//!
//! The inverse of resolution: given a final activation state and the
//! compositions the caller wants to keep active, produce the shortest
//! canonical expression that resolves back to the same state.
//!
//! Only groups whose layers differ from what the compositions alone produce
//! get tokens. Per group, the encoding is:
//!
//! - nothing on: `Group-`
//! - exactly one on: `Group>Name`
//! - otherwise: `Group+Name` / `Group-Name` for each differing layer
//!
//! Composition names keep the caller's order; op tokens are sorted so the
//! same state always prints the same way.

use indexmap::IndexSet;

use crate::error::Result;
use crate::parser::DEFAULT_EXPRESSION;
use crate::resolve::Resolver;
use crate::types::{ActivationMap, ActiveMacroSet, AtomicOp, Layer};

/// Synthesize the canonical expression for `state` with `active` kept on.
///
/// Fails only if one of the active compositions is cyclic.
pub fn synthesize(
    resolver: &Resolver<'_>,
    state: &ActivationMap,
    active: &ActiveMacroSet,
) -> Result<String> {
    let tokens = diff_tokens(resolver, state, active)?;

    let parts: Vec<String> = active
        .iter()
        .map(String::from)
        .chain(tokens.iter().map(ToString::to_string))
        .collect();

    if parts.is_empty() {
        Ok(DEFAULT_EXPRESSION.to_string())
    } else {
        Ok(parts.join(","))
    }
}

/// The op tokens needed on top of `active` to reach `state`, sorted by
/// their text.
pub fn diff_tokens(
    resolver: &Resolver<'_>,
    state: &ActivationMap,
    active: &ActiveMacroSet,
) -> Result<Vec<AtomicOp>> {
    let catalog = resolver.catalog();
    let preset = resolver.preset_state(active)?;

    let differs = |layer: &Layer| state.is_on(&layer.id) != preset.is_on(&layer.id);

    let groups: IndexSet<&str> = catalog
        .layers()
        .iter()
        .filter(|&layer| differs(layer))
        .map(|layer| layer.group.as_str())
        .collect();

    let mut ops = Vec::new();
    for group in groups {
        let on: Vec<&Layer> = catalog.group(group).filter(|l| state.is_on(&l.id)).collect();

        match on.as_slice() {
            [] => ops.push(AtomicOp::clear_group(group)),
            [only] => ops.push(AtomicOp::exclusive(group, only.name.as_str())),
            _ => {
                for layer in catalog.group(group).filter(|&l| differs(l)) {
                    if state.is_on(&layer.id) {
                        ops.push(AtomicOp::enable(group, layer.name.as_str()));
                    } else {
                        ops.push(AtomicOp::disable(group, layer.name.as_str()));
                    }
                }
            }
        }
    }

    ops.sort_by_cached_key(ToString::to_string);
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{
        parse_catalog, parse_composition_registry, parse_default_baseline, parse_expression,
    };
    use crate::registry::CompositionRegistry;
    use crate::types::{DefaultBaseline, LayerCatalog, ManualOverrides};

    struct Fixture {
        catalog: LayerCatalog,
        registry: CompositionRegistry,
        baseline: DefaultBaseline,
    }

    impl Fixture {
        fn new(catalog: &str, registry: &str, baseline: &str) -> Self {
            Self {
                catalog: parse_catalog(catalog),
                registry: parse_composition_registry(registry),
                baseline: parse_default_baseline(baseline),
            }
        }

        fn resolver(&self) -> Resolver<'_> {
            Resolver::new(&self.catalog, &self.registry, &self.baseline)
        }

        /// Resolve, synthesize, then re-parse and re-resolve.
        fn round_trip(&self, active: &ActiveMacroSet, overrides: &ManualOverrides) -> String {
            let resolver = self.resolver();
            let state = resolver.resolve(active, overrides).unwrap();
            let text = synthesize(&resolver, &state, active).unwrap();

            let expr = parse_expression(&text, &self.registry);
            assert_eq!(&expr.macros, active, "macros survive in {text}");
            let again = resolver
                .resolve(&expr.macros, &expr.overrides(&self.catalog))
                .unwrap();
            assert!(
                again.same_layers(&state, &self.catalog),
                "round trip of {text} changed the state"
            );
            text
        }
    }

    const FACE: &str =
        "Eyes:Open:1\nEyes:Closed:1\nEyes:Wide:1\nMouth:Grin:2\nMouth:Frown:2\nHat:Cap:3\nHat:Bow:3\n";

    fn active(names: &[&str]) -> ActiveMacroSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_override_bypassing_exclusivity() {
        let fx = Fixture::new("Mouth:Grin:1\nMouth:Frown:1\n", "Smile:Mouth>Grin", "Smile:");
        let mut overrides = ManualOverrides::new();
        overrides.set("Mouth/Frown", true);

        let resolver = fx.resolver();
        let state = resolver.resolve(&active(&["Smile"]), &overrides).unwrap();
        assert!(state.is_on("Mouth/Grin"));
        assert!(state.is_on("Mouth/Frown"));

        let text = synthesize(&resolver, &state, &active(&["Smile"])).unwrap();
        assert_eq!(text, "Smile,Mouth+Frown");
    }

    #[test]
    fn test_empty_is_default_literal() {
        let fx = Fixture::new("", "", "");
        let text = synthesize(&fx.resolver(), &ActivationMap::new(), &ActiveMacroSet::new()).unwrap();
        assert_eq!(text, "Default");
    }

    #[test]
    fn test_no_diff_prints_macros_only() {
        let fx = Fixture::new(FACE, "Blink:Eyes>Closed\nSmile:Mouth>Grin", "");
        let text = fx.round_trip(&active(&["Smile", "Blink"]), &ManualOverrides::new());
        assert_eq!(text, "Smile,Blink");
    }

    #[test]
    fn test_single_on_uses_exclusive() {
        let fx = Fixture::new(FACE, "Blink:Eyes>Closed", "");
        let mut overrides = ManualOverrides::new();
        overrides.set("Eyes/Closed", false);
        overrides.set("Eyes/Wide", true);

        let text = fx.round_trip(&active(&["Blink"]), &overrides);
        assert_eq!(text, "Blink,Eyes>Wide");
    }

    #[test]
    fn test_none_on_uses_clear_group() {
        let fx = Fixture::new(FACE, "Smile:Mouth>Grin", "");
        let mut overrides = ManualOverrides::new();
        overrides.set("Mouth/Grin", false);

        let text = fx.round_trip(&active(&["Smile"]), &overrides);
        assert_eq!(text, "Smile,Mouth-");
    }

    #[test]
    fn test_ops_only_without_macros() {
        let fx = Fixture::new(FACE, "", "");
        let mut overrides = ManualOverrides::new();
        overrides.set("Hat/Bow", true);
        overrides.set("Eyes/Open", true);

        let text = fx.round_trip(&ActiveMacroSet::new(), &overrides);
        assert_eq!(text, "Eyes>Open,Hat>Bow");
    }

    #[test]
    fn test_multi_on_lists_only_differing_layers() {
        let fx = Fixture::new(FACE, "Awake:Eyes>Open", "");
        let mut overrides = ManualOverrides::new();
        overrides.set("Eyes/Wide", true);
        overrides.set("Eyes/Closed", true);

        let text = fx.round_trip(&active(&["Awake"]), &overrides);
        assert_eq!(text, "Awake,Eyes+Closed,Eyes+Wide");
    }

    #[test]
    fn test_multi_on_with_disable() {
        let fx = Fixture::new(FACE, "Wild:Eyes+Open,Eyes+Closed", "");
        let mut overrides = ManualOverrides::new();
        overrides.set("Eyes/Closed", false);
        overrides.set("Eyes/Wide", true);

        let text = fx.round_trip(&active(&["Wild"]), &overrides);
        assert_eq!(text, "Wild,Eyes+Wide,Eyes-Closed");
    }

    #[test]
    fn test_baseline_counts_as_preset() {
        let fx = Fixture::new(FACE, "", ":Hat>Cap");
        let text = fx.round_trip(&ActiveMacroSet::new(), &ManualOverrides::new());
        assert_eq!(text, "Default");

        let mut overrides = ManualOverrides::new();
        overrides.set("Hat/Cap", false);
        assert_eq!(fx.round_trip(&ActiveMacroSet::new(), &overrides), "Hat-");
    }

    #[test]
    fn test_stale_ids_ignored() {
        let fx = Fixture::new(FACE, "", "");
        let mut state = ActivationMap::new();
        state.set("Cape/Red", true);
        let text = synthesize(&fx.resolver(), &state, &ActiveMacroSet::new()).unwrap();
        assert_eq!(text, "Default");
    }

    #[test]
    fn test_caller_macro_order_preserved() {
        let fx = Fixture::new(FACE, "A:Eyes>Open\nB:Eyes>Closed", "");
        let resolver = fx.resolver();
        let state = resolver.preset_state(&active(&["B", "A"])).unwrap();
        let text = synthesize(&resolver, &state, &active(&["B", "A"])).unwrap();
        assert_eq!(text, "B,A");
    }
}
