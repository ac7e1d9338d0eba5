//! Data model for the combinational logic-circuit sandbox.
//!
//! This crate owns the gate catalog, the circuit graph (gates plus directed
//! connections), and the structural error taxonomy. Evaluation lives in
//! `gatesim_eval`; this crate only guarantees that a circuit is structurally
//! well-formed (declared ports, fan-in 1, no dangling endpoints).

mod circuit;
mod error;

pub use crate::circuit::*;
pub use crate::error::*;
