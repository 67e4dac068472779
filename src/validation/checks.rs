//! Validation checks for a loaded character.
//!
//! Each check takes a `&Character` and returns a `ValidationResult`.

use crate::character::Character;
use crate::registry::Part;
use crate::types::{AtomicOp, LayerCatalog};

use super::warning::{Diagnostic, ValidationResult};

const OPERATOR_CHARS: [char; 3] = ['+', '-', '>'];

/// Composition reference cycles. These make resolution fail.
pub fn check_cycles(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();

    for cycle in character.registry().graph().cycles() {
        result.push(
            Diagnostic::error(
                "compo::validate::cycle",
                format!("Composition cycle: {}", cycle.join(" -> ")),
            )
            .with_help("Remove one of the references so no composition includes itself"),
        );
    }

    result
}

/// Catalog ids or composition names defined more than once.
pub fn check_duplicates(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();

    for id in character.catalog().duplicates() {
        result.push(
            Diagnostic::warning(
                "compo::validate::duplicate-layer",
                format!("Layer '{}' is defined more than once", id),
            )
            .with_help("The first definition is used"),
        );
    }

    for name in character.registry().duplicates() {
        result.push(
            Diagnostic::warning(
                "compo::validate::duplicate-composition",
                format!("Composition '{}' is defined more than once", name),
            )
            .with_help("The last definition is used"),
        );
    }

    result
}

/// Catalog layers that no expression token can name.
///
/// A group holding an operator character splits at the wrong place, and a
/// comma in a group or name splits the token itself. Such layers can still
/// be pinned by hand, but the expression for that state will not read back.
pub fn check_addressable(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();

    for layer in character.catalog().layers() {
        let bad_group = layer.group.contains(OPERATOR_CHARS) || layer.group.contains(',');
        if bad_group || layer.name.contains(',') {
            result.push(
                Diagnostic::warning(
                    "compo::validate::unaddressable-layer",
                    format!("Layer '{}' cannot be written in an expression", layer.id),
                )
                .with_help(
                    "Group names may not contain '+', '-', '>' or ','; \
                     layer names may not contain ','",
                ),
            );
        }
    }

    result
}

/// Lines the best-effort parsers dropped.
pub fn check_skipped_lines(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();

    for line in character.skipped_layers() {
        result.push(
            Diagnostic::warning(
                "compo::validate::skipped-line",
                format!("Catalog {} was ignored", line),
            )
            .with_help("Expected group:name:order with an integer order"),
        );
    }

    for line in character.skipped_compositions() {
        result.push(
            Diagnostic::warning(
                "compo::validate::skipped-line",
                format!("Compositions {} was ignored", line),
            )
            .with_help("Expected name:part,part,..."),
        );
    }

    result
}

/// Composition parts that are neither compositions nor valid ops, and ops
/// that target groups or layers the catalog does not have.
pub fn check_parts(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();
    let registry = character.registry();

    for composition in registry.compositions() {
        for part in &composition.parts {
            match registry.classify(part) {
                Part::Composition(_) => {}
                Part::Op(op) => {
                    let context = format!("in composition '{}'", composition.name);
                    result.merge(check_op_target(character.catalog(), &op, &context));
                }
                Part::Unknown => result.push(
                    Diagnostic::warning(
                        "compo::validate::unknown-part",
                        format!(
                            "Part '{}' in composition '{}' is neither a composition nor an op",
                            part, composition.name
                        ),
                    )
                    .with_help("Ops look like Group+Name, Group-Name, Group>Name or Group-"),
                ),
            }
        }
    }

    result
}

/// Baseline presets that name no composition, and baseline ops with bad
/// targets.
pub fn check_baseline(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();
    let baseline = character.baseline();

    for name in &baseline.preset_names {
        if !character.registry().contains(name) {
            result.push(Diagnostic::warning(
                "compo::validate::unknown-preset",
                format!("Default preset '{}' is not a composition", name),
            ));
        }
    }

    for token in &baseline.base_ops {
        match crate::parser::parse_atomic_op(token) {
            Some(op) => {
                result.merge(check_op_target(character.catalog(), &op, "in the default baseline"))
            }
            None => result.push(Diagnostic::warning(
                "compo::validate::unknown-part",
                format!("Default op '{}' is not a valid op", token),
            )),
        }
    }

    result
}

fn check_op_target(catalog: &LayerCatalog, op: &AtomicOp, context: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !catalog.has_group(&op.group) {
        result.push(Diagnostic::warning(
            "compo::validate::unknown-group",
            format!("Op '{}' {} targets unknown group '{}'", op, context, op.group),
        ));
        return result;
    }

    if let Some(id) = op.target_id() {
        if !catalog.contains(&id) {
            result.push(Diagnostic::warning(
                "compo::validate::unknown-layer",
                format!("Op '{}' {} targets unknown layer '{}'", op, context, id),
            ));
        }
    }

    result
}
