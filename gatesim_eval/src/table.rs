use std::fmt;

use tracing::debug;

use gatesim_core::{Circuit, GateId};

use crate::engine::PropagationEngine;

/// One enumerated input combination and the outputs it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTableRow {
    /// Switch values, ordered like [`TruthTable::switches`].
    pub inputs: Vec<bool>,
    /// Output-gate values, ordered like [`TruthTable::outputs`].
    pub outputs: Vec<bool>,
    /// False if this row's evaluation hit the pass bound.
    pub stable: bool,
}

/// Exhaustive enumeration of a circuit's switch combinations.
///
/// Input columns are the circuit's `Switch` gates ascending by id, with the
/// lowest id as the most significant bit: row `i` carries the k-bit binary
/// representation of `i`. Output columns are the `Output` gates, ascending
/// by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    switches: Vec<GateId>,
    outputs: Vec<GateId>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Enumerates all `2^k` switch combinations of `circuit`.
    ///
    /// Works on a private clone, so the live circuit — including its current
    /// switch states — is never perturbed. With zero switches or zero
    /// outputs the table has no rows (a circuit under construction has no
    /// observable truth table yet); the column labels that do exist are
    /// kept so callers can still render headers.
    #[must_use]
    pub fn generate(circuit: &Circuit, engine: &PropagationEngine) -> Self {
        let switches = circuit.switch_ids();
        let outputs = circuit.output_ids();

        if switches.is_empty() || outputs.is_empty() {
            return Self {
                switches,
                outputs,
                rows: Vec::new(),
            };
        }

        let k = switches.len();
        debug!(switches = k, outputs = outputs.len(), "enumerating truth table");

        let mut scratch = circuit.clone();
        let mut rows = Vec::with_capacity(1 << k);

        for combination in 0u64..(1u64 << k) {
            let inputs: Vec<bool> = (0..k)
                .map(|column| (combination >> (k - 1 - column)) & 1 == 1)
                .collect();

            for (switch, value) in switches.iter().zip(&inputs) {
                // Switch ids come from the clone's own gate set.
                let _ = scratch.set_switch(*switch, *value);
            }

            let result = engine.run(&scratch);
            let row = TruthTableRow {
                inputs,
                outputs: outputs
                    .iter()
                    .map(|id| result.output_of(*id).unwrap_or(false))
                    .collect(),
                stable: result.is_stable(),
            };
            rows.push(row);
        }

        Self {
            switches,
            outputs,
            rows,
        }
    }

    /// Input column labels (switch ids, ascending).
    #[must_use]
    pub fn switches(&self) -> &[GateId] {
        &self.switches
    }

    /// Output column labels (output-gate ids, ascending).
    #[must_use]
    pub fn outputs(&self) -> &[GateId] {
        &self.outputs
    }

    /// Enumerated rows, in combination order.
    #[must_use]
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Returns true if the circuit had no observable truth table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for switch in &self.switches {
            write!(f, "{:>4} ", switch.to_string())?;
        }
        write!(f, "|")?;
        for output in &self.outputs {
            write!(f, " {:>4}", output.to_string())?;
        }
        writeln!(f)?;

        for row in &self.rows {
            for value in &row.inputs {
                write!(f, "{:>4} ", u8::from(*value))?;
            }
            write!(f, "|")?;
            for value in &row.outputs {
                write!(f, " {:>4}", u8::from(*value))?;
            }
            if !row.stable {
                write!(f, "  (unstable)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
