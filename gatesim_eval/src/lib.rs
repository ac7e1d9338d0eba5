//! Signal propagation and truth-table generation for sandbox circuits.
//!
//! The engine computes a fixpoint signal assignment by bounded iterative
//! relaxation, so it handles arbitrary wiring including feedback loops; it
//! never assumes the graph is acyclic. The truth-table generator drives the
//! engine across every switch combination on a private circuit snapshot.

mod engine;
mod table;

pub use crate::engine::{
    Convergence, DEFAULT_MAX_PASSES, EvaluationResult, GateSignals, PropagationEngine,
};
pub use crate::table::{TruthTable, TruthTableRow};
