//! Core conversion from machine-description documents to formal notation.
//!
//! This crate provides:
//! - Element records for the states and transitions of a document
//! - A state registry resolving numeric ids to state names
//! - Transition indexes grouping formatted δ lines by source state
//! - A deterministic renderer for the formal tuple notation
//!
//! The crate is the pure core of the converter: it receives a [`MachineDoc`]
//! already reduced to element records and produces the rendered text. It
//! performs no I/O and no markup parsing.

pub mod delta;
pub mod error;
pub mod model;
pub mod registry;
pub mod render;
pub mod symbol;

pub use delta::{
    build_finite, build_pushdown, build_turing, DeltaMap, FiniteIndex, PushdownIndex, TuringIndex,
};
pub use error::{ConvertError, ConvertResult};
pub use model::{
    FaTransition, MachineDoc, MachineType, PdaTransition, StateRecord, TmTransition, TransitionSet,
};
pub use registry::Registry;
pub use render::formalize;
pub use symbol::{normalize, BLANK, EPSILON};
