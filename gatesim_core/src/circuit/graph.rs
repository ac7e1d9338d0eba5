use indexmap::IndexMap;
use itertools::Itertools;
use tracing::trace;

use crate::circuit::connection::Connection;
use crate::circuit::connection_id::ConnectionId;
use crate::circuit::gate::{Gate, GateInputs};
use crate::circuit::gate_id::GateId;
use crate::circuit::gate_kind::GateKind;
use crate::circuit::port::InputPort;
use crate::error::CircuitError;

/// Owner of all gates and connections of one sandbox circuit.
///
/// All interaction goes through the operations here; nothing outside the
/// circuit holds references into it. Storage is insertion-ordered, and ids
/// are allocated monotonically, so iteration order is ascending-id and
/// deterministic across runs.
///
/// `Clone` produces the private snapshot the truth-table generator works on.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    gates: IndexMap<GateId, Gate>,
    connections: IndexMap<ConnectionId, Connection>,
    next_gate: u32,
    next_connection: u32,
}

impl Circuit {
    /// Creates an empty circuit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new gate of `kind` with all ports low. Always succeeds.
    pub fn add_gate(&mut self, kind: GateKind) -> GateId {
        let id = GateId::new(self.next_gate);
        self.next_gate += 1;
        self.gates.insert(id, Gate::new(id, kind));
        trace!(%id, %kind, "placed gate");
        id
    }

    /// Removes a gate and every connection touching it.
    ///
    /// # Errors
    /// [`CircuitError::UnknownGate`] if `id` is not present.
    pub fn remove_gate(&mut self, id: GateId) -> Result<(), CircuitError> {
        if self.gates.shift_remove(&id).is_none() {
            return Err(CircuitError::UnknownGate(id));
        }
        self.connections.retain(|_, c| !c.touches(id));
        trace!(%id, "removed gate and attached wires");
        Ok(())
    }

    /// Wires `source`'s output into `target_port` on `target`.
    ///
    /// # Errors
    /// - [`CircuitError::UnknownGate`] if either endpoint is absent.
    /// - [`CircuitError::InvalidPort`] if the target kind does not declare
    ///   `target_port`.
    /// - [`CircuitError::PortOccupied`] if the port already has an incoming
    ///   connection; the existing wiring is left untouched.
    pub fn connect(
        &mut self,
        source: GateId,
        target: GateId,
        target_port: InputPort,
    ) -> Result<ConnectionId, CircuitError> {
        if !self.gates.contains_key(&source) {
            return Err(CircuitError::UnknownGate(source));
        }
        let target_kind = self
            .gates
            .get(&target)
            .map(Gate::kind)
            .ok_or(CircuitError::UnknownGate(target))?;
        if !target_kind.declares(target_port) {
            return Err(CircuitError::InvalidPort {
                kind: target_kind,
                port: target_port,
            });
        }
        if let Some(existing) = self.incoming(target, target_port) {
            return Err(CircuitError::PortOccupied {
                gate: target,
                port: target_port,
                existing: existing.id(),
            });
        }

        let id = ConnectionId::new(self.next_connection);
        self.next_connection += 1;
        self.connections
            .insert(id, Connection::new(id, source, target, target_port));
        trace!(%id, %source, %target, port = %target_port, "wired");
        Ok(id)
    }

    /// Removes a connection.
    ///
    /// The target port's latched input value is not cleared here; the next
    /// propagation pass recomputes every input from the live connections, so
    /// the port reverts to unconnected-low behavior on the next evaluation.
    ///
    /// # Errors
    /// [`CircuitError::UnknownConnection`] if `id` is not present.
    pub fn disconnect(&mut self, id: ConnectionId) -> Result<(), CircuitError> {
        self.connections
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(CircuitError::UnknownConnection(id))
    }

    /// Sets a switch's output state.
    ///
    /// # Errors
    /// - [`CircuitError::UnknownGate`] if `id` is not present.
    /// - [`CircuitError::WrongKind`] if the gate is not a `Switch`.
    pub fn set_switch(&mut self, id: GateId, value: bool) -> Result<(), CircuitError> {
        let gate = self
            .gates
            .get_mut(&id)
            .ok_or(CircuitError::UnknownGate(id))?;
        if gate.kind() != GateKind::Switch {
            return Err(CircuitError::WrongKind {
                gate: id,
                kind: gate.kind(),
            });
        }
        gate.set_output(value);
        Ok(())
    }

    /// Writes an evaluated input/output assignment onto a gate.
    ///
    /// This is the commit channel the propagation engine uses; a `Switch`'s
    /// state is never written through here.
    ///
    /// # Errors
    /// - [`CircuitError::UnknownGate`] if `id` is not present.
    /// - [`CircuitError::InvalidPort`] if the shape of `inputs` does not
    ///   match the gate kind's arity.
    pub fn write_gate_signals(
        &mut self,
        id: GateId,
        inputs: GateInputs,
        output: bool,
    ) -> Result<(), CircuitError> {
        let gate = self
            .gates
            .get_mut(&id)
            .ok_or(CircuitError::UnknownGate(id))?;
        if inputs.arity() != gate.kind().arity() {
            return Err(CircuitError::InvalidPort {
                kind: gate.kind(),
                port: InputPort::Input2,
            });
        }
        gate.set_signals(inputs, output);
        Ok(())
    }

    /// Looks up a gate.
    #[must_use]
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.get(&id)
    }

    /// Looks up a connection.
    #[must_use]
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    /// Read-only view of all gates, in placement order.
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.values()
    }

    /// Read-only view of all connections, in wiring order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Number of gates currently placed.
    #[must_use]
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of connections currently wired.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The connection feeding `(target, port)`, if any. Fan-in is 1, so at
    /// most one exists.
    #[must_use]
    pub fn incoming(&self, target: GateId, port: InputPort) -> Option<&Connection> {
        self.connections
            .values()
            .find(|c| c.target() == target && c.target_port() == port)
    }

    /// Ids of all `Switch` gates, ascending. The stable ordering key used to
    /// label truth-table input columns.
    #[must_use]
    pub fn switch_ids(&self) -> Vec<GateId> {
        self.ids_of_kind(GateKind::Switch)
    }

    /// Ids of all `Output` gates, ascending. The stable ordering key used to
    /// label truth-table output columns.
    #[must_use]
    pub fn output_ids(&self) -> Vec<GateId> {
        self.ids_of_kind(GateKind::Output)
    }

    fn ids_of_kind(&self, kind: GateKind) -> Vec<GateId> {
        self.gates
            .values()
            .filter(|g| g.kind() == kind)
            .map(Gate::id)
            .sorted()
            .collect()
    }
}
