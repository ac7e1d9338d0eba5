#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use rstest::rstest;

use gatesim_core::{Circuit, GateKind, InputPort};
use gatesim_eval::{PropagationEngine, TruthTable};

/// Two switches feeding one binary gate feeding one output.
fn binary_gate_circuit(kind: GateKind) -> Circuit {
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let b = circuit.add_gate(GateKind::Switch);
    let gate = circuit.add_gate(kind);
    let out = circuit.add_gate(GateKind::Output);
    circuit.connect(a, gate, InputPort::Input1).unwrap();
    circuit.connect(b, gate, InputPort::Input2).unwrap();
    circuit.connect(gate, out, InputPort::Input1).unwrap();
    circuit
}

fn single_column(table: &TruthTable) -> Vec<bool> {
    table.rows().iter().map(|r| r.outputs[0]).collect()
}

#[rstest]
#[case(GateKind::And, [false, false, false, true])]
#[case(GateKind::Or, [false, true, true, true])]
#[case(GateKind::Xor, [false, true, true, false])]
fn test_binary_gate_tables(#[case] kind: GateKind, #[case] expected: [bool; 4]) {
    let engine = PropagationEngine::new();
    let circuit = binary_gate_circuit(kind);

    let table = TruthTable::generate(&circuit, &engine);

    assert_eq!(table.rows().len(), 4);
    assert_eq!(single_column(&table), expected);
    assert!(table.rows().iter().all(|r| r.stable));
}

#[test]
fn test_row_inputs_count_up_msb_first() {
    let engine = PropagationEngine::new();
    let circuit = binary_gate_circuit(GateKind::And);

    let table = TruthTable::generate(&circuit, &engine);

    let inputs: Vec<Vec<bool>> = table.rows().iter().map(|r| r.inputs.clone()).collect();
    assert_eq!(
        inputs,
        vec![
            vec![false, false],
            vec![false, true],
            vec![true, false],
            vec![true, true],
        ]
    );
    // The MSB column is the lowest switch id.
    assert!(table.switches()[0] < table.switches()[1]);
}

#[test]
fn test_table_shape_three_switches_two_outputs() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let b = circuit.add_gate(GateKind::Switch);
    let c = circuit.add_gate(GateKind::Switch);
    let and = circuit.add_gate(GateKind::And);
    let or = circuit.add_gate(GateKind::Or);
    let out1 = circuit.add_gate(GateKind::Output);
    let out2 = circuit.add_gate(GateKind::Output);
    circuit.connect(a, and, InputPort::Input1).unwrap();
    circuit.connect(b, and, InputPort::Input2).unwrap();
    circuit.connect(b, or, InputPort::Input1).unwrap();
    circuit.connect(c, or, InputPort::Input2).unwrap();
    circuit.connect(and, out1, InputPort::Input1).unwrap();
    circuit.connect(or, out2, InputPort::Input1).unwrap();

    let table = TruthTable::generate(&circuit, &engine);

    assert_eq!(table.rows().len(), 8);
    assert_eq!(table.switches().len(), 3);
    assert_eq!(table.outputs().len(), 2);
    assert!(table.rows().iter().all(|r| r.outputs.len() == 2));
}

#[test]
fn test_no_switches_yields_empty_table() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let not = circuit.add_gate(GateKind::Not);
    let out = circuit.add_gate(GateKind::Output);
    circuit.connect(not, out, InputPort::Input1).unwrap();

    let table = TruthTable::generate(&circuit, &engine);

    assert!(table.is_empty());
    assert_eq!(table.outputs().len(), 1);
}

#[test]
fn test_no_outputs_yields_empty_table() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let not = circuit.add_gate(GateKind::Not);
    circuit.connect(a, not, InputPort::Input1).unwrap();

    let table = TruthTable::generate(&circuit, &engine);

    assert!(table.is_empty());
    assert_eq!(table.switches().len(), 1);
}

#[test]
fn test_generate_does_not_disturb_live_circuit() {
    let engine = PropagationEngine::new();
    let mut circuit = binary_gate_circuit(GateKind::Or);
    let a = circuit.switch_ids()[0];
    circuit.set_switch(a, true).unwrap();
    engine.evaluate(&mut circuit).unwrap();
    let before: Vec<_> = circuit.gates().copied().collect();

    let _table = TruthTable::generate(&circuit, &engine);

    let after: Vec<_> = circuit.gates().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn test_inverter_table() {
    let engine = PropagationEngine::new();
    let mut circuit = Circuit::new();
    let a = circuit.add_gate(GateKind::Switch);
    let not = circuit.add_gate(GateKind::Not);
    let out = circuit.add_gate(GateKind::Output);
    circuit.connect(a, not, InputPort::Input1).unwrap();
    circuit.connect(not, out, InputPort::Input1).unwrap();

    let table = TruthTable::generate(&circuit, &engine);

    assert_eq!(single_column(&table), vec![true, false]);
}

#[test]
fn test_display_renders_all_rows() {
    let engine = PropagationEngine::new();
    let circuit = binary_gate_circuit(GateKind::And);

    let rendered = TruthTable::generate(&circuit, &engine).to_string();

    // Header plus four combination rows.
    assert_eq!(rendered.lines().count(), 5);
    assert!(rendered.contains('|'));
}
