//! Circuit graph: gate records, directed connections, and their owner.

mod connection;
mod connection_id;
mod gate;
mod gate_id;
mod gate_kind;
mod graph;
mod port;

pub use connection::Connection;
pub use connection_id::ConnectionId;
pub use gate::{Gate, GateInputs};
pub use gate_id::GateId;
pub use gate_kind::GateKind;
pub use graph::Circuit;
pub use port::InputPort;
