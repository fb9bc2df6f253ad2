//! Deterministic rendering of the formal machine definition.

use crate::delta::{
    build_finite, build_pushdown, build_turing, DeltaMap, FiniteIndex, PushdownIndex, TuringIndex,
};
use crate::error::ConvertResult;
use crate::model::{MachineDoc, TransitionSet};
use crate::registry::Registry;

/// Render the formal definition of a machine document.
///
/// For a fixed document the output is byte-identical across runs: states
/// render in ascending numeric id order, alphabets enumerate in ascending
/// lexicographic order, and δ lines group by ascending source id keeping
/// document order within each group.
pub fn formalize(doc: &MachineDoc) -> ConvertResult<String> {
    let registry = Registry::build(&doc.states)?;

    match &doc.transitions {
        TransitionSet::Turing(transitions) => {
            let index = build_turing(transitions, &registry)?;
            Ok(render_turing(&registry, &index))
        }
        TransitionSet::Finite(transitions) => {
            let index = build_finite(transitions, &registry)?;
            Ok(render_finite(&registry, &index))
        }
        TransitionSet::Pushdown(transitions) => {
            let index = build_pushdown(transitions, &registry)?;
            Ok(render_pushdown(&registry, &index))
        }
    }
}

fn render_turing(registry: &Registry, index: &TuringIndex) -> String {
    let mut out = format!("TM = (K,Σ,Γ,δ,{},F)\n", registry.initial_name());
    push_set(&mut out, "K", registry.state_names());
    out.push_str("Σ = {TODO}\n");
    push_set(&mut out, "Γ", index.work_alphabet.iter().map(String::as_str));
    push_set(&mut out, "F", registry.final_names());
    push_delta(&mut out, &index.delta);
    out
}

fn render_finite(registry: &Registry, index: &FiniteIndex) -> String {
    let mut out = format!("FA = (K,Σ,δ,{},F)\n", registry.initial_name());
    push_set(&mut out, "K", registry.state_names());
    push_set(&mut out, "Σ", index.input_alphabet.iter().map(String::as_str));
    push_set(&mut out, "F", registry.final_names());
    push_delta(&mut out, &index.delta);
    out
}

fn render_pushdown(registry: &Registry, index: &PushdownIndex) -> String {
    let mut out = format!("PDA = (K,Σ,Γ,δ,{},Z,F)\n", registry.initial_name());
    push_set(&mut out, "K", registry.state_names());
    push_set(&mut out, "Σ", index.input_alphabet.iter().map(String::as_str));
    push_set(&mut out, "Γ", index.stack_alphabet.iter().map(String::as_str));
    push_set(&mut out, "F", registry.final_names());
    push_delta(&mut out, &index.delta);
    out
}

/// Append `label = {a,b,c}` with the comma-joined items. Empty sequences
/// render as empty braces.
fn push_set<'a>(out: &mut String, label: &str, items: impl Iterator<Item = &'a str>) {
    out.push_str(label);
    out.push_str(" = {");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item);
    }
    out.push_str("}\n");
}

fn push_delta(out: &mut String, delta: &DeltaMap) {
    for line in delta.lines() {
        out.push_str(line);
        out.push('\n');
    }
}
