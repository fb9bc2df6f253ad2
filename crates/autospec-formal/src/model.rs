//! Element records extracted from a machine-description document.
//!
//! These are the core's input contract: the boundary layer reduces the
//! document tree to these records, and everything downstream is pure
//! computation over them.

use std::fmt;

/// Machine categories a document can describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineType {
    /// Finite automaton (`fa`).
    Finite,
    /// Pushdown automaton (`pda`).
    Pushdown,
    /// Single-tape Turing machine (`turing`).
    Turing,
}

impl MachineType {
    /// Map a document's `type` tag to a category.
    pub fn from_tag(tag: &str) -> Option<MachineType> {
        match tag {
            "fa" => Some(MachineType::Finite),
            "pda" => Some(MachineType::Pushdown),
            "turing" => Some(MachineType::Turing),
            _ => None,
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineType::Finite => write!(f, "finite automaton"),
            MachineType::Pushdown => write!(f, "pushdown automaton"),
            MachineType::Turing => write!(f, "Turing machine"),
        }
    }
}

/// A state element: id and name attributes plus role markers.
///
/// The id is kept as raw attribute text so the registry can report parse
/// failures with the record's position in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRecord {
    pub id: String,
    pub name: String,
    pub is_initial: bool,
    pub is_final: bool,
}

/// A Turing machine transition element.
///
/// An absent symbol field reads as the empty string. Movement tokens are
/// carried verbatim, without validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TmTransition {
    pub from: String,
    pub to: String,
    pub read: String,
    pub write: String,
    pub movement: String,
}

/// A finite automaton transition element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaTransition {
    pub from: String,
    pub to: String,
    pub read: String,
}

/// A pushdown automaton transition element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdaTransition {
    pub from: String,
    pub to: String,
    pub read: String,
    pub pop: String,
    pub push: String,
}

/// The transitions of a document, tagged by machine category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionSet {
    Finite(Vec<FaTransition>),
    Pushdown(Vec<PdaTransition>),
    Turing(Vec<TmTransition>),
}

impl TransitionSet {
    /// Number of transition records.
    pub fn len(&self) -> usize {
        match self {
            TransitionSet::Finite(ts) => ts.len(),
            TransitionSet::Pushdown(ts) => ts.len(),
            TransitionSet::Turing(ts) => ts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A machine-description document reduced to its element records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineDoc {
    pub states: Vec<StateRecord>,
    pub transitions: TransitionSet,
}

impl MachineDoc {
    /// The machine category described by this document.
    pub fn machine_type(&self) -> MachineType {
        match self.transitions {
            TransitionSet::Finite(_) => MachineType::Finite,
            TransitionSet::Pushdown(_) => MachineType::Pushdown,
            TransitionSet::Turing(_) => MachineType::Turing,
        }
    }
}
