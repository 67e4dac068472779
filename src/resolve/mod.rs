//! State resolution.
//!
//! Computes which layers are on from the baseline, the active compositions
//! and the user's manual overrides. Precedence, lowest first:
//!
//! 1. baseline ops, in order
//! 2. active compositions, in activation order (later parts win)
//! 3. manual overrides, unconditionally
//!
//! Resolution is pure: the same inputs always give the same map.

use indexmap::IndexSet;

use crate::error::{CompoError, Result};
use crate::parser::parse_atomic_op;
use crate::registry::{Composition, CompositionRegistry, Part};
use crate::types::{
    layer_id, ActivationMap, ActiveMacroSet, AtomicOp, DefaultBaseline, LayerCatalog,
    ManualOverrides, OpKind,
};

/// Apply one atomic op to a map.
///
/// Group-wide ops (`Exclusive`, `ClearGroup`) only touch layers the catalog
/// knows about; single-layer ops write their id whether or not it exists.
pub fn apply_op(catalog: &LayerCatalog, map: &mut ActivationMap, op: &AtomicOp) {
    match op.kind {
        OpKind::Enable => map.set(layer_id(&op.group, &op.name), true),
        OpKind::Disable => map.set(layer_id(&op.group, &op.name), false),
        OpKind::Exclusive => {
            for layer in catalog.group(&op.group) {
                map.set(layer.id.clone(), layer.name == op.name);
            }
        }
        OpKind::ClearGroup => {
            for layer in catalog.group(&op.group) {
                map.set(layer.id.clone(), false);
            }
        }
    }
}

/// Resolves activation state for one character's catalog, registry and
/// baseline.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a LayerCatalog,
    registry: &'a CompositionRegistry,
    baseline: &'a DefaultBaseline,
}

impl<'a> Resolver<'a> {
    pub fn new(
        catalog: &'a LayerCatalog,
        registry: &'a CompositionRegistry,
        baseline: &'a DefaultBaseline,
    ) -> Self {
        Self {
            catalog,
            registry,
            baseline,
        }
    }

    pub fn catalog(&self) -> &'a LayerCatalog {
        self.catalog
    }

    pub fn registry(&self) -> &'a CompositionRegistry {
        self.registry
    }

    /// Resolve the full state: baseline, then compositions, then overrides.
    ///
    /// Fails only if an active composition includes itself.
    pub fn resolve(
        &self,
        active: &ActiveMacroSet,
        overrides: &ManualOverrides,
    ) -> Result<ActivationMap> {
        let mut map = self.preset_state(active)?;
        for (id, on) in overrides.iter() {
            map.set(id, on);
        }
        Ok(map)
    }

    /// Resolve baseline and compositions only, without manual overrides.
    pub fn preset_state(&self, active: &ActiveMacroSet) -> Result<ActivationMap> {
        let mut map = ActivationMap::new();

        for token in &self.baseline.base_ops {
            if let Some(op) = parse_atomic_op(token) {
                apply_op(self.catalog, &mut map, &op);
            }
        }

        for name in active.iter() {
            self.expand(name, &mut map)?;
        }

        Ok(map)
    }

    /// Expand one composition into `map`. Unknown names are a no-op.
    ///
    /// Nesting depth is bounded only by the registry size; expansion keeps
    /// its own frame stack instead of recursing.
    pub fn expand(&self, name: &str, map: &mut ActivationMap) -> Result<()> {
        let Some(root) = self.registry.get(name) else {
            return Ok(());
        };

        // One frame per composition being expanded: (composition, next part).
        // `in_progress` mirrors the frame names; a name already in it closes a
        // cycle. Names expanded earlier on another branch expand again.
        let mut frames: Vec<(&Composition, usize)> = vec![(root, 0)];
        let mut in_progress: IndexSet<&str> = IndexSet::new();
        in_progress.insert(&root.name);

        while let Some(frame) = frames.last_mut() {
            let (composition, next) = *frame;
            let Some(part) = composition.parts.get(next) else {
                frames.pop();
                in_progress.pop();
                continue;
            };
            frame.1 += 1;

            match self.registry.classify(part) {
                Part::Composition(inner) => {
                    if let Some(start) = in_progress.get_index_of(inner.name.as_str()) {
                        let mut cycle: Vec<String> =
                            in_progress.iter().skip(start).map(|s| s.to_string()).collect();
                        cycle.push(inner.name.clone());
                        return Err(CompoError::CyclicComposition { cycle });
                    }
                    in_progress.insert(&inner.name);
                    frames.push((inner, 0));
                }
                Part::Op(op) => apply_op(self.catalog, map, &op),
                Part::Unknown => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_catalog, parse_composition_registry, parse_default_baseline};

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
    }

    fn active(names: &[&str]) -> ActiveMacroSet {
        names.iter().copied().collect()
    }

    const FACE: &str = "Eyes:Open:1\nEyes:Closed:1\nEyes:Wide:1\nMouth:Grin:2\nMouth:Frown:2\n";

    #[test]
    fn test_blink_example() {
        let fx = Fixture::new("Eyes:Open:1\nEyes:Closed:1\n", "Blink:Eyes>Closed", "");
        let map = fx
            .resolver()
            .resolve(&active(&["Blink"]), &ManualOverrides::new())
            .unwrap();

        assert!(map.is_on("Eyes/Closed"));
        assert_eq!(map.get("Eyes/Open"), Some(false));
    }

    #[test]
    fn test_empty_everything() {
        let fx = Fixture::new("", "", "");
        let map = fx
            .resolver()
            .resolve(&ActiveMacroSet::new(), &ManualOverrides::new())
            .unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_baseline_applied_first() {
        let fx = Fixture::new(FACE, "Smile:Mouth>Grin", "Smile:Eyes>Open,Mouth>Frown");
        let resolver = fx.resolver();

        let base = resolver.preset_state(&ActiveMacroSet::new()).unwrap();
        assert!(base.is_on("Eyes/Open"));
        assert!(base.is_on("Mouth/Frown"));

        let smiling = resolver.preset_state(&active(&["Smile"])).unwrap();
        assert!(smiling.is_on("Mouth/Grin"));
        assert!(!smiling.is_on("Mouth/Frown"));
        assert!(smiling.is_on("Eyes/Open"));
    }

    #[test]
    fn test_later_macro_wins() {
        let fx = Fixture::new(FACE, "Blink:Eyes>Closed\nStare:Eyes>Wide", "");
        let resolver = fx.resolver();

        let map = resolver.preset_state(&active(&["Blink", "Stare"])).unwrap();
        assert!(map.is_on("Eyes/Wide"));
        assert!(!map.is_on("Eyes/Closed"));

        let map = resolver.preset_state(&active(&["Stare", "Blink"])).unwrap();
        assert!(map.is_on("Eyes/Closed"));
        assert!(!map.is_on("Eyes/Wide"));
    }

    #[test]
    fn test_later_part_wins() {
        let fx = Fixture::new(FACE, "Mixed:Eyes>Closed,Eyes+Open", "");
        let map = fx.resolver().preset_state(&active(&["Mixed"])).unwrap();
        assert!(map.is_on("Eyes/Closed"));
        assert!(map.is_on("Eyes/Open"));
        assert!(!map.is_on("Eyes/Wide"));
    }

    #[test]
    fn test_nested_expansion_in_order() {
        let fx = Fixture::new(
            FACE,
            "Blink:Eyes>Closed\nSleepy:Eyes>Wide,Blink,Mouth-\n",
            "",
        );
        let map = fx.resolver().preset_state(&active(&["Sleepy"])).unwrap();
        assert!(map.is_on("Eyes/Closed"));
        assert!(!map.is_on("Eyes/Wide"));
        assert!(!map.is_on("Mouth/Grin"));
        assert!(!map.is_on("Mouth/Frown"));
    }

    #[test]
    fn test_override_beats_everything() {
        let fx = Fixture::new(FACE, "Smile:Mouth>Grin", ":Mouth>Grin");
        let mut overrides = ManualOverrides::new();
        overrides.set("Mouth/Grin", false);
        overrides.set("Mouth/Frown", true);

        let map = fx.resolver().resolve(&active(&["Smile"]), &overrides).unwrap();
        assert!(!map.is_on("Mouth/Grin"));
        assert!(map.is_on("Mouth/Frown"));
    }

    #[test]
    fn test_unknown_names_and_tokens_ignored() {
        let fx = Fixture::new(FACE, "Odd:Nope,garbage,,Eyes>Open", "Ghost:junk");
        let resolver = fx.resolver();
        let map = resolver.preset_state(&active(&["Odd", "Missing"])).unwrap();

        assert!(map.is_on("Eyes/Open"));
        assert_eq!(map.active_layers(&fx.catalog).len(), 1);
    }

    #[test]
    fn test_enable_unknown_layer_writes_stale_id() {
        let fx = Fixture::new(FACE, "Hat:Hat+Top", "");
        let map = fx.resolver().preset_state(&active(&["Hat"])).unwrap();
        assert!(map.is_on("Hat/Top"));
        assert!(map.active_layers(&fx.catalog).is_empty());
    }

    #[test]
    fn test_exclusive_leaves_exactly_one() {
        let catalog = parse_catalog(FACE);
        let mut map = ActivationMap::new();
        map.set("Eyes/Open", true);
        map.set("Eyes/Wide", true);

        apply_op(&catalog, &mut map, &AtomicOp::exclusive("Eyes", "Closed"));

        let on = catalog.group("Eyes").filter(|l| map.is_on(&l.id)).count();
        assert_eq!(on, 1);
        assert!(map.is_on("Eyes/Closed"));
    }

    #[test]
    fn test_clear_group_leaves_none() {
        let catalog = parse_catalog(FACE);
        let mut map = ActivationMap::new();
        map.set("Mouth/Grin", true);
        map.set("Mouth/Frown", true);

        apply_op(&catalog, &mut map, &AtomicOp::clear_group("Mouth"));

        assert_eq!(catalog.group("Mouth").filter(|l| map.is_on(&l.id)).count(), 0);
    }

    #[test]
    fn test_diamond_expands_shared_part_twice() {
        // Both branches include Base; Base must re-apply after Left.
        let fx = Fixture::new(
            FACE,
            "Base:Eyes>Open\nLeft:Base,Eyes>Closed\nRight:Base\nBoth:Left,Right\n",
            "",
        );
        let map = fx.resolver().preset_state(&active(&["Both"])).unwrap();
        assert!(map.is_on("Eyes/Open"));
        assert!(!map.is_on("Eyes/Closed"));
    }

    #[test]
    fn test_self_reference_is_cycle_error() {
        let fx = Fixture::new(FACE, "Loop:Eyes+Open,Loop", "");
        let err = fx.resolver().preset_state(&active(&["Loop"])).unwrap_err();
        match err {
            CompoError::CyclicComposition { cycle } => assert_eq!(cycle, vec!["Loop", "Loop"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transitive_cycle_reports_path() {
        let fx = Fixture::new(FACE, "A:B\nB:C\nC:Eyes+Open,A\n", "");
        let err = fx.resolver().preset_state(&active(&["B"])).unwrap_err();
        assert_eq!(err.to_string(), "Cyclic composition: B -> C -> A -> B");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let fx = Fixture::new(FACE, "Smile:Mouth>Grin\nBlink:Eyes>Closed", "Smile:Eyes>Open");
        let resolver = fx.resolver();
        let mut overrides = ManualOverrides::new();
        overrides.set("Eyes/Wide", true);

        let first = resolver.resolve(&active(&["Smile", "Blink"]), &overrides).unwrap();
        let second = resolver.resolve(&active(&["Smile", "Blink"]), &overrides).unwrap();
        assert_eq!(first, second);
    }

    fn chain(depth: usize) -> String {
        let mut registry = String::new();
        for i in 0..depth {
            registry.push_str(&format!("M{}:M{}\n", i, i + 1));
        }
        registry.push_str(&format!("M{}:Eyes>Closed\n", depth));
        registry
    }

    #[test]
    fn test_deep_chain_resolves() {
        let fx = Fixture::new(FACE, &chain(10_000), ":Eyes>Open");
        let map = fx.resolver().preset_state(&active(&["M0"])).unwrap();
        assert!(map.is_on("Eyes/Closed"));
        assert!(!map.is_on("Eyes/Open"));
    }

    #[test]
    fn test_deep_chain_closing_cycle_is_error() {
        let mut registry = chain(10_000);
        registry.push_str("M10000:Eyes>Closed,M0\n");
        let fx = Fixture::new(FACE, &registry, "");

        match fx.resolver().preset_state(&active(&["M0"])).unwrap_err() {
            CompoError::CyclicComposition { cycle } => {
                assert_eq!(cycle.len(), 10_002);
                assert_eq!(cycle.first(), cycle.last());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wide_dag_keeps_part_order() {
        // Shared compositions reached many times at different depths; the
        // last part in expansion order must win.
        let fx = Fixture::new(
            FACE,
            "Open:Eyes>Open\nShut:Eyes>Closed\nWide:Eyes>Wide\n\
             Pair:Shut,Open\nMany:Wide,Pair,Open,Wide,Pair,Mouth>Frown,Pair,Shut\n",
            "",
        );
        let map = fx.resolver().preset_state(&active(&["Many"])).unwrap();
        assert!(map.is_on("Eyes/Closed"));
        assert!(!map.is_on("Eyes/Open"));
        assert!(map.is_on("Mouth/Frown"));

        let map = fx.resolver().preset_state(&active(&["Many", "Pair"])).unwrap();
        assert!(map.is_on("Eyes/Open"));
        assert!(!map.is_on("Eyes/Closed"));
    }
}
