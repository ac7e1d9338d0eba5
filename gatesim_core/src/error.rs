//! Error types for circuit mutations.
//!
//! Every variant is local, synchronous, and fully recoverable: a rejected
//! operation leaves the circuit exactly as it was. Non-convergence during
//! evaluation is deliberately *not* an error; the engine tags its result
//! instead.

use thiserror::Error;

use crate::circuit::{ConnectionId, GateId, GateKind, InputPort};

/// Errors that can occur while mutating a [`Circuit`].
///
/// [`Circuit`]: crate::Circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    /// Operation referenced a gate id not present in the circuit.
    #[error("unknown gate: {0}")]
    UnknownGate(GateId),

    /// Operation referenced a connection id not present in the circuit.
    #[error("unknown connection: {0}")]
    UnknownConnection(ConnectionId),

    /// The target gate's kind does not declare the requested input port.
    #[error("gate kind {kind} has no port {port}")]
    InvalidPort {
        /// Kind of the target gate.
        kind: GateKind,
        /// The port that was requested.
        port: InputPort,
    },

    /// The target input port already has an incoming connection.
    ///
    /// The caller must `disconnect` the existing wire first; it is never
    /// silently replaced.
    #[error("port {port} of {gate} is already fed by {existing}")]
    PortOccupied {
        /// The target gate.
        gate: GateId,
        /// The occupied port.
        port: InputPort,
        /// The connection currently feeding the port.
        existing: ConnectionId,
    },

    /// `set_switch` was called on a gate that is not a `Switch`.
    #[error("{gate} is a {kind}, not a Switch")]
    WrongKind {
        /// The addressed gate.
        gate: GateId,
        /// Its actual kind.
        kind: GateKind,
    },
}
