//! Transition indexes: grouped δ lines and accumulated alphabets.
//!
//! One builder per machine category. All of them resolve state references
//! through the registry, normalize symbols, and append the category's
//! formatted δ line under the transition's source state.

use crate::error::ConvertResult;
use crate::model::{FaTransition, PdaTransition, TmTransition};
use crate::registry::Registry;
use crate::symbol::{normalize, BLANK, EPSILON};
use std::collections::{BTreeMap, BTreeSet};

/// Formatted δ lines grouped by source state id.
///
/// Iteration is ascending by numeric source id; within a group, lines keep
/// the document's transition order.
#[derive(Clone, Debug, Default)]
pub struct DeltaMap {
    groups: BTreeMap<i64, Vec<String>>,
    len: usize,
}

impl DeltaMap {
    fn push(&mut self, source: i64, line: String) {
        self.groups.entry(source).or_default().push(line);
        self.len += 1;
    }

    /// All δ lines in rendering order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.values().flatten().map(String::as_str)
    }

    /// Number of δ lines, one per input transition.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Index of a Turing machine's transitions.
#[derive(Clone, Debug)]
pub struct TuringIndex {
    pub delta: DeltaMap,
    /// Distinct non-blank read/write symbols.
    pub work_alphabet: BTreeSet<String>,
}

/// Index of a finite automaton's transitions.
#[derive(Clone, Debug)]
pub struct FiniteIndex {
    pub delta: DeltaMap,
    /// Distinct non-empty read symbols.
    pub input_alphabet: BTreeSet<String>,
}

/// Index of a pushdown automaton's transitions.
#[derive(Clone, Debug)]
pub struct PushdownIndex {
    pub delta: DeltaMap,
    /// Distinct non-empty read symbols.
    pub input_alphabet: BTreeSet<String>,
    /// Distinct characters of pop/push strings.
    pub stack_alphabet: BTreeSet<String>,
}

/// Build the transition index of a Turing machine.
pub fn build_turing(
    transitions: &[TmTransition],
    registry: &Registry,
) -> ConvertResult<TuringIndex> {
    let mut delta = DeltaMap::default();
    let mut work_alphabet = BTreeSet::new();

    for (index, t) in transitions.iter().enumerate() {
        let (source, from) = registry.resolve(&t.from, index, "from")?;
        let (_, to) = registry.resolve(&t.to, index, "to")?;

        let (read, read_contributes) = normalize(&t.read, BLANK);
        let (write, write_contributes) = normalize(&t.write, BLANK);
        if read_contributes {
            work_alphabet.insert(read.to_string());
        }
        if write_contributes {
            work_alphabet.insert(write.to_string());
        }

        let movement = t.movement.as_str();
        delta.push(source, format!("δ({from},{read}) = ({to},{write},{movement})"));
    }

    Ok(TuringIndex {
        delta,
        work_alphabet,
    })
}

/// Build the transition index of a finite automaton.
pub fn build_finite(
    transitions: &[FaTransition],
    registry: &Registry,
) -> ConvertResult<FiniteIndex> {
    let mut delta = DeltaMap::default();
    let mut input_alphabet = BTreeSet::new();

    for (index, t) in transitions.iter().enumerate() {
        let (source, from) = registry.resolve(&t.from, index, "from")?;
        let (_, to) = registry.resolve(&t.to, index, "to")?;

        let (read, contributes) = normalize(&t.read, EPSILON);
        if contributes {
            input_alphabet.insert(read.to_string());
        }

        delta.push(source, format!("δ({from},{read}) = {to}"));
    }

    Ok(FiniteIndex {
        delta,
        input_alphabet,
    })
}

/// Build the transition index of a pushdown automaton.
pub fn build_pushdown(
    transitions: &[PdaTransition],
    registry: &Registry,
) -> ConvertResult<PushdownIndex> {
    let mut delta = DeltaMap::default();
    let mut input_alphabet = BTreeSet::new();
    let mut stack_alphabet = BTreeSet::new();

    for (index, t) in transitions.iter().enumerate() {
        let (source, from) = registry.resolve(&t.from, index, "from")?;
        let (_, to) = registry.resolve(&t.to, index, "to")?;

        let (read, contributes) = normalize(&t.read, EPSILON);
        if contributes {
            input_alphabet.insert(read.to_string());
        }
        for c in t.pop.chars().chain(t.push.chars()) {
            stack_alphabet.insert(c.to_string());
        }

        let (pop, _) = normalize(&t.pop, EPSILON);
        let (push, _) = normalize(&t.push, EPSILON);
        delta.push(source, format!("δ({from},{read},{pop}) = ({to},{push})"));
    }

    Ok(PushdownIndex {
        delta,
        input_alphabet,
        stack_alphabet,
    })
}
