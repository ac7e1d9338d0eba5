#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use rstest::rstest;

use gatesim_core::{Circuit, GateId, GateKind, InputPort};
use gatesim_eval::{Convergence, DEFAULT_MAX_PASSES, PropagationEngine};

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Switch -> gate -> output wiring shared by the binary-gate cases.
fn two_input_fixture(kind: GateKind) -> (Circuit, GateId, GateId, GateId) {
    init_test_logger();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let b = circuit.add_gate(GateKind::Switch);
    let gate = circuit.add_gate(kind);
    circuit.connect(a, gate, InputPort::Input1).unwrap();
    circuit.connect(b, gate, InputPort::Input2).unwrap();
    (circuit, a, b, gate)
}

#[rstest]
#[case(GateKind::And, [false, false, false, true])]
#[case(GateKind::Or, [false, true, true, true])]
#[case(GateKind::Xor, [false, true, true, false])]
fn test_two_input_gate_functions(#[case] kind: GateKind, #[case] expected: [bool; 4]) {
    let engine = PropagationEngine::new();
    let (mut circuit, a, b, gate) = two_input_fixture(kind);

    for (i, want) in expected.iter().enumerate() {
        let (in1, in2) = ((i & 2) != 0, (i & 1) != 0);
        circuit.set_switch(a, in1).unwrap();
        circuit.set_switch(b, in2).unwrap();
        let convergence = engine.evaluate(&mut circuit).unwrap();

        assert!(convergence.is_stable());
        assert_eq!(
            circuit.gate(gate).unwrap().output(),
            *want,
            "{kind} with inputs ({in1}, {in2})",
        );
    }
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn test_not_negates_input1(#[case] input: bool, #[case] expected: bool) {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let not = circuit.add_gate(GateKind::Not);
    circuit.connect(a, not, InputPort::Input1).unwrap();

    circuit.set_switch(a, input).unwrap();
    engine.evaluate(&mut circuit).unwrap();

    assert_eq!(circuit.gate(not).unwrap().output(), expected);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_output_gate_passes_input1_through(#[case] input: bool) {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let out = circuit.add_gate(GateKind::Output);
    circuit.connect(a, out, InputPort::Input1).unwrap();

    circuit.set_switch(a, input).unwrap();
    engine.evaluate(&mut circuit).unwrap();

    assert_eq!(circuit.gate(out).unwrap().output(), input);
}

#[test]
fn test_unconnected_inputs_read_low() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let or = circuit.add_gate(GateKind::Or);
    // Only input1 is fed; input2 stays unconnected.
    circuit.connect(a, or, InputPort::Input1).unwrap();

    circuit.set_switch(a, true).unwrap();
    engine.evaluate(&mut circuit).unwrap();

    let gate = circuit.gate(or).unwrap();
    assert_eq!(gate.input1(), Some(true));
    assert_eq!(gate.input2(), Some(false));
    assert!(gate.output());
}

#[test]
fn test_disconnect_reverts_port_to_low() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let out = circuit.add_gate(GateKind::Output);
    let wire = circuit.connect(a, out, InputPort::Input1).unwrap();

    circuit.set_switch(a, true).unwrap();
    engine.evaluate(&mut circuit).unwrap();
    assert!(circuit.gate(out).unwrap().output());

    // No explicit clear: the next pass recomputes from live connections.
    circuit.disconnect(wire).unwrap();
    engine.evaluate(&mut circuit).unwrap();

    let gate = circuit.gate(out).unwrap();
    assert_eq!(gate.input1(), Some(false));
    assert!(!gate.output());
}

#[test]
fn test_evaluate_is_idempotent() {
    let engine = PropagationEngine::new();
    let (mut circuit, a, b, _) = two_input_fixture(GateKind::Xor);
    circuit.set_switch(a, true).unwrap();
    circuit.set_switch(b, false).unwrap();

    engine.evaluate(&mut circuit).unwrap();
    let first = engine.run(&circuit);
    let second = engine.run(&circuit);
    assert_eq!(first, second);

    // Committing an already-settled assignment changes nothing either.
    let before: Vec<_> = circuit.gates().copied().collect();
    engine.evaluate(&mut circuit).unwrap();
    let after: Vec<_> = circuit.gates().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn test_chained_gates_settle() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let not1 = circuit.add_gate(GateKind::Not);
    let not2 = circuit.add_gate(GateKind::Not);
    let out = circuit.add_gate(GateKind::Output);
    circuit.connect(a, not1, InputPort::Input1).unwrap();
    circuit.connect(not1, not2, InputPort::Input1).unwrap();
    circuit.connect(not2, out, InputPort::Input1).unwrap();

    circuit.set_switch(a, true).unwrap();
    let convergence = engine.evaluate(&mut circuit).unwrap();

    assert!(convergence.is_stable());
    // Double negation restores the switch value.
    assert!(circuit.gate(out).unwrap().output());
}

#[test]
fn test_or_self_loop_terminates_within_bound() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let or = circuit.add_gate(GateKind::Or);
    // Output fed back into input1; input2 left unconnected (reads low).
    circuit.connect(or, or, InputPort::Input1).unwrap();

    let result = engine.run(&circuit);

    assert!(result.convergence().passes() <= DEFAULT_MAX_PASSES);
    // or(false, false) = false is already a fixpoint, so this one settles.
    assert!(result.is_stable());
    assert_eq!(result.output_of(or), Some(false));
}

#[test]
fn test_not_self_loop_is_tagged_unstable() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let not = circuit.add_gate(GateKind::Not);
    // A ring oscillator: no stable assignment exists.
    circuit.connect(not, not, InputPort::Input1).unwrap();

    let convergence = engine.evaluate(&mut circuit).unwrap();

    assert_eq!(
        convergence,
        Convergence::NotConverged {
            passes: DEFAULT_MAX_PASSES
        }
    );
}

#[test]
fn test_latched_or_loop_holds_after_switch_drops() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let or = circuit.add_gate(GateKind::Or);
    circuit.connect(a, or, InputPort::Input1).unwrap();
    circuit.connect(or, or, InputPort::Input2).unwrap();

    circuit.set_switch(a, true).unwrap();
    assert!(engine.evaluate(&mut circuit).unwrap().is_stable());
    assert!(circuit.gate(or).unwrap().output());

    // Feedback keeps the high value alive once the switch drops.
    circuit.set_switch(a, false).unwrap();
    assert!(engine.evaluate(&mut circuit).unwrap().is_stable());
    assert!(circuit.gate(or).unwrap().output());
}

#[test]
fn test_run_does_not_mutate_circuit() {
    let engine = PropagationEngine::new();
    let (mut circuit, a, _, gate) = two_input_fixture(GateKind::Or);
    circuit.set_switch(a, true).unwrap();

    let result = engine.run(&circuit);

    assert_eq!(result.output_of(gate), Some(true));
    // Only `evaluate` commits; the live gate still shows its stale value.
    assert!(!circuit.gate(gate).unwrap().output());
}

#[test]
fn test_custom_pass_bound() {
    let engine = PropagationEngine::with_max_passes(3);
    let mut circuit = Circuit::new();
    let not = circuit.add_gate(GateKind::Not);
    circuit.connect(not, not, InputPort::Input1).unwrap();

    let result = engine.run(&circuit);

    assert_eq!(result.convergence(), Convergence::NotConverged { passes: 3 });
}

#[test]
fn test_empty_circuit_evaluates() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();

    let convergence = engine.evaluate(&mut circuit).unwrap();

    assert!(convergence.is_stable());
    assert!(engine.run(&circuit).is_empty());
}
