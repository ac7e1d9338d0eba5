use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use tracing::{debug, trace};

use gatesim_core::{Circuit, CircuitError, Gate, GateId, GateInputs, GateKind, InputPort};

/// Default pass bound for the relaxation loop.
///
/// Sandbox circuits are a handful of gates, so twenty passes is generous;
/// feedback loops that have not settled by then are oscillating. The bound
/// is configurable through [`PropagationEngine::with_max_passes`].
pub const DEFAULT_MAX_PASSES: usize = 20;

/// Outcome tag of one evaluation.
///
/// Hitting the pass bound is a soft condition, not an error: the last
/// computed assignment is still the best available approximation of an
/// unstable circuit and is returned alongside this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Convergence {
    /// A pass produced no changes; the assignment is a true fixpoint.
    Stable {
        /// Passes executed, including the final change-free one.
        passes: usize,
    },
    /// The pass bound was reached while values were still changing.
    NotConverged {
        /// Passes executed (the configured bound).
        passes: usize,
    },
}

impl Convergence {
    /// Returns true if the assignment is a true fixpoint.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Passes executed before stopping.
    #[must_use]
    pub const fn passes(self) -> usize {
        match self {
            Self::Stable { passes } | Self::NotConverged { passes } => passes,
        }
    }
}

/// Per-gate slice of an [`EvaluationResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GateSignals {
    /// Input values, shaped by the gate kind's arity.
    pub inputs: GateInputs,
    /// Output value.
    pub output: bool,
}

/// Snapshot of a full signal assignment, keyed by gate id.
///
/// Ephemeral: produced by [`PropagationEngine::run`] and never touches the
/// circuit unless the caller commits it (which
/// [`PropagationEngine::evaluate`] does immediately for interactive use).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationResult {
    signals: BTreeMap<GateId, GateSignals>,
    convergence: Convergence,
}

impl EvaluationResult {
    /// The convergence tag for this assignment.
    #[must_use]
    pub const fn convergence(&self) -> Convergence {
        self.convergence
    }

    /// Returns true if the assignment is a true fixpoint.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.convergence.is_stable()
    }

    /// Computed output of one gate.
    #[must_use]
    pub fn output_of(&self, id: GateId) -> Option<bool> {
        self.signals.get(&id).map(|s| s.output)
    }

    /// All computed signals, ascending by gate id.
    pub fn signals(&self) -> impl Iterator<Item = (GateId, GateSignals)> + '_ {
        self.signals.iter().map(|(id, s)| (*id, *s))
    }

    /// Number of gates covered by the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Returns true if the snapshot covers no gates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Computes fixpoint signal assignments by bounded iterative relaxation.
///
/// The graph may contain cycles, so the engine never topologically sorts;
/// it re-derives every non-switch gate from the current value map until a
/// pass changes nothing or the pass bound is hit. Gates are visited in
/// ascending-id order each pass, so results and traces are deterministic
/// for a fixed circuit and switch state.
#[derive(Clone, Copy, Debug)]
pub struct PropagationEngine {
    max_passes: usize,
}

impl Default for PropagationEngine {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl PropagationEngine {
    /// Engine with the default pass bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom pass bound (at least one pass).
    #[must_use]
    pub const fn with_max_passes(max_passes: usize) -> Self {
        let max_passes = if max_passes == 0 { 1 } else { max_passes };
        Self { max_passes }
    }

    /// The configured pass bound.
    #[must_use]
    pub const fn max_passes(self) -> usize {
        self.max_passes
    }

    /// Computes a signal assignment for the circuit without mutating it.
    ///
    /// Switch outputs are read from the circuit and are authoritative;
    /// every other gate's inputs are re-derived from the live connections
    /// (an unfed port reads `false`) and its output from its kind's boolean
    /// function.
    #[must_use]
    pub fn run(&self, circuit: &Circuit) -> EvaluationResult {
        let mut values: BTreeMap<GateId, bool> =
            circuit.gates().map(|g| (g.id(), g.output())).collect();

        // (target, port) -> source; fan-in 1 makes this a plain map.
        let feeds: HashMap<(GateId, InputPort), GateId> = circuit
            .connections()
            .map(|c| ((c.target(), c.target_port()), c.source()))
            .collect();

        let order: Vec<&Gate> = circuit
            .gates()
            .filter(|g| !g.kind().is_source())
            .sorted_by_key(|g| g.id())
            .collect();

        let mut convergence = Convergence::NotConverged {
            passes: self.max_passes,
        };

        for pass in 1..=self.max_passes {
            let mut changed = 0usize;

            for gate in &order {
                let (inputs, output) = derive(gate.id(), gate.kind(), &feeds, &values);
                let previous = values.insert(gate.id(), output);
                if previous != Some(output) {
                    changed += 1;
                    trace!(gate = %gate.id(), kind = %gate.kind(), ?inputs, output, "flipped");
                }
            }

            debug!(pass, changed, "propagation pass");
            if changed == 0 {
                convergence = Convergence::Stable { passes: pass };
                break;
            }
        }

        // Final per-gate snapshot. Outputs are the last computed values;
        // inputs are re-read from the same map so the snapshot reflects what
        // each port saw on the final pass.
        let signals: BTreeMap<GateId, GateSignals> = circuit
            .gates()
            .map(|g| {
                let output = values.get(&g.id()).copied().unwrap_or(false);
                let inputs = if g.kind().is_source() {
                    GateInputs::None
                } else {
                    derive(g.id(), g.kind(), &feeds, &values).0
                };
                (g.id(), GateSignals { inputs, output })
            })
            .collect();

        EvaluationResult {
            signals,
            convergence,
        }
    }

    /// Runs the engine and commits the assignment back onto the circuit.
    ///
    /// Switch gates are left untouched; their state is owned by the caller.
    ///
    /// # Errors
    /// Propagates [`CircuitError`] from the write-back; with the structural
    /// invariants the circuit maintains this does not occur in practice.
    pub fn evaluate(&self, circuit: &mut Circuit) -> Result<Convergence, CircuitError> {
        let result = self.run(circuit);
        for (id, sig) in result.signals() {
            let is_source = circuit.gate(id).is_some_and(|g| g.kind().is_source());
            if !is_source {
                circuit.write_gate_signals(id, sig.inputs, sig.output)?;
            }
        }
        Ok(result.convergence())
    }
}

/// Re-derives one gate's inputs and output from the value map. Unfed ports
/// read `false`.
fn derive(
    id: GateId,
    kind: GateKind,
    feeds: &HashMap<(GateId, InputPort), GateId>,
    values: &BTreeMap<GateId, bool>,
) -> (GateInputs, bool) {
    let read = |port: InputPort| -> bool {
        feeds
            .get(&(id, port))
            .and_then(|source| values.get(source))
            .copied()
            .unwrap_or(false)
    };

    let input1 = read(InputPort::Input1);
    let input2 = read(InputPort::Input2);
    let inputs = match kind.arity() {
        0 => GateInputs::None,
        1 => GateInputs::One { input1 },
        _ => GateInputs::Two { input1, input2 },
    };
    let output = kind.apply(input1, input2).unwrap_or(false);
    (inputs, output)
}
