use std::fmt;

use crate::circuit::connection_id::ConnectionId;
use crate::circuit::gate_id::GateId;
use crate::circuit::port::InputPort;

/// Directed wire from one gate's output to another gate's input port.
///
/// The source endpoint is always the source gate's single output port, so
/// only the target side carries a port name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
    id: ConnectionId,
    source: GateId,
    target: GateId,
    target_port: InputPort,
}

impl Connection {
    pub(crate) const fn new(
        id: ConnectionId,
        source: GateId,
        target: GateId,
        target_port: InputPort,
    ) -> Self {
        Self {
            id,
            source,
            target,
            target_port,
        }
    }

    /// The connection's circuit-unique id.
    #[must_use]
    pub const fn id(&self) -> ConnectionId {
        self.id
    }

    /// Gate whose output drives this wire.
    #[must_use]
    pub const fn source(&self) -> GateId {
        self.source
    }

    /// Gate whose input port this wire feeds.
    #[must_use]
    pub const fn target(&self) -> GateId {
        self.target
    }

    /// The fed input port on the target gate.
    #[must_use]
    pub const fn target_port(&self) -> InputPort {
        self.target_port
    }

    /// Returns true if either endpoint references `gate`.
    #[must_use]
    pub fn touches(&self, gate: GateId) -> bool {
        self.source == gate || self.target == gate
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}.output -> {}.{}",
            self.id, self.source, self.target, self.target_port
        )
    }
}
