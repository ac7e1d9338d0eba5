//! Gatesim CLI
//!
//! Entry point for the gatesim command-line tool. Loads a JSON circuit
//! description, applies switch settings, runs one propagation pass to a
//! fixpoint, and prints the gate values and the circuit's truth table.

mod args;
mod circuit_file;

use clap::Parser;
use tracing::info;

use gatesim_eval::TruthTable;

use args::Args;
use circuit_file::LoadedCircuit;

/// Executes the gatesim evaluator.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and wires the described circuit
/// 4. Evaluates it with the configured pass bound
/// 5. Renders gate values and, unless suppressed, the truth table
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let engine = args.to_engine();

    info!("Loading circuit: {}", args.circuit.display());
    let mut loaded = LoadedCircuit::from_path(&args.circuit)?;
    loaded.apply_assignments(&args.sets)?;

    let convergence = engine.evaluate(&mut loaded.circuit)?;
    info!(
        "Evaluation finished after {} passes (stable: {})",
        convergence.passes(),
        convergence.is_stable()
    );

    println!("=== Gate values ===");
    for gate in loaded.circuit.gates() {
        let name = loaded.name_of(gate.id()).unwrap_or("?");
        println!(
            "{:>10}  {:<6} {} = {}",
            name,
            gate.kind().to_string(),
            gate.id(),
            u8::from(gate.output())
        );
    }
    if !convergence.is_stable() {
        println!("(circuit did not settle; values are the last computed pass)");
    }

    if !args.no_table {
        let table = TruthTable::generate(&loaded.circuit, &engine);
        println!("\n=== Truth table ===");
        if table.is_empty() {
            println!("(no switches or no outputs yet)");
        } else {
            print!("{table}");
        }
    }

    Ok(())
}
