//! JSON circuit descriptions and their translation into a live [`Circuit`].
//!
//! The file format names gates symbolically so wires stay readable:
//!
//! ```json
//! {
//!   "gates": [
//!     { "name": "a",    "kind": "switch" },
//!     { "name": "and1", "kind": "and" },
//!     { "name": "y",    "kind": "output" }
//!   ],
//!   "wires": [
//!     { "from": "a",    "to": "and1", "port": "input1" },
//!     { "from": "and1", "to": "y",    "port": "input1" }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use gatesim_core::{Circuit, CircuitError, GateId, GateKind, InputPort};

/// Errors raised while loading a circuit description.
#[derive(Debug, Error)]
pub enum CircuitFileError {
    /// The file could not be read.
    #[error("failed to read circuit file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for the expected schema.
    #[error("failed to parse circuit file: {0}")]
    Json(#[from] serde_json::Error),

    /// A gate declared an unknown kind string.
    #[error("gate '{name}': {reason}")]
    BadKind {
        /// Declared gate name.
        name: String,
        /// Parse failure detail.
        reason: String,
    },

    /// A wire declared an unknown port string.
    #[error("wire into '{to}': {reason}")]
    BadPort {
        /// Target gate name.
        to: String,
        /// Parse failure detail.
        reason: String,
    },

    /// Two gates were declared with the same name.
    #[error("duplicate gate name: '{0}'")]
    DuplicateName(String),

    /// A wire referenced a name with no gate declaration.
    #[error("unknown gate name: '{0}'")]
    UnknownName(String),

    /// A switch assignment was not of the form `name=0|1`.
    #[error("bad switch assignment '{0}', expected NAME=0|1")]
    BadAssignment(String),

    /// The described wiring violated a structural invariant.
    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

#[derive(Debug, Deserialize)]
struct GateDecl {
    name: String,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct WireDecl {
    from: String,
    to: String,
    port: String,
}

#[derive(Debug, Deserialize)]
struct CircuitFile {
    gates: Vec<GateDecl>,
    #[serde(default)]
    wires: Vec<WireDecl>,
}

/// A circuit built from a description file, with its name table.
#[derive(Debug)]
pub struct LoadedCircuit {
    /// The constructed circuit.
    pub circuit: Circuit,
    /// Declared name -> allocated gate id.
    pub names: HashMap<String, GateId>,
}

impl LoadedCircuit {
    /// Reads and builds a circuit from a JSON description file.
    ///
    /// # Errors
    /// [`CircuitFileError`] on io/parse failures or when the description
    /// violates a structural invariant (bad kind/port, duplicate or unknown
    /// name, occupied port).
    pub fn from_path(path: &Path) -> Result<Self, CircuitFileError> {
        let text = std::fs::read_to_string(path)?;
        let file: CircuitFile = serde_json::from_str(&text)?;
        Self::build(file)
    }

    /// Applies `name=0|1` switch assignments.
    ///
    /// # Errors
    /// [`CircuitFileError::BadAssignment`] on a malformed pair,
    /// [`CircuitFileError::UnknownName`] for an undeclared gate, and
    /// [`CircuitFileError::Circuit`] when the target is not a switch.
    pub fn apply_assignments(&mut self, sets: &[String]) -> Result<(), CircuitFileError> {
        for set in sets {
            let (name, value) = set
                .split_once('=')
                .ok_or_else(|| CircuitFileError::BadAssignment(set.clone()))?;
            let value = match value.trim() {
                "0" | "false" => false,
                "1" | "true" => true,
                _ => return Err(CircuitFileError::BadAssignment(set.clone())),
            };
            let id = self.resolve(name.trim())?;
            self.circuit.set_switch(id, value)?;
        }
        Ok(())
    }

    /// Looks up a declared gate name.
    ///
    /// # Errors
    /// [`CircuitFileError::UnknownName`] if the name was never declared.
    pub fn resolve(&self, name: &str) -> Result<GateId, CircuitFileError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CircuitFileError::UnknownName(name.to_owned()))
    }

    /// The declared name of a gate, if it has one.
    #[must_use]
    pub fn name_of(&self, id: GateId) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, gid)| **gid == id)
            .map(|(name, _)| name.as_str())
    }

    fn build(file: CircuitFile) -> Result<Self, CircuitFileError> {
        let mut circuit = Circuit::new();
        let mut names: HashMap<String, GateId> = HashMap::new();

        for decl in file.gates {
            let kind: GateKind =
                decl.kind
                    .parse()
                    .map_err(|reason| CircuitFileError::BadKind {
                        name: decl.name.clone(),
                        reason,
                    })?;
            let id = circuit.add_gate(kind);
            if names.insert(decl.name.clone(), id).is_some() {
                return Err(CircuitFileError::DuplicateName(decl.name));
            }
        }

        for wire in file.wires {
            let port: InputPort =
                wire.port
                    .parse()
                    .map_err(|reason| CircuitFileError::BadPort {
                        to: wire.to.clone(),
                        reason,
                    })?;
            let source = names
                .get(&wire.from)
                .copied()
                .ok_or_else(|| CircuitFileError::UnknownName(wire.from.clone()))?;
            let target = names
                .get(&wire.to)
                .copied()
                .ok_or_else(|| CircuitFileError::UnknownName(wire.to.clone()))?;
            circuit.connect(source, target, port)?;
        }

        debug!(
            gates = circuit.gate_count(),
            wires = circuit.connection_count(),
            "circuit built"
        );
        Ok(Self { circuit, names })
    }
}
