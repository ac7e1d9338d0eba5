use std::path::PathBuf;

use clap::Parser;

use gatesim_eval::{DEFAULT_MAX_PASSES, PropagationEngine};

/// Gatesim - evaluate a logic circuit and print its truth table
#[derive(Parser, Debug)]
#[command(name = "gatesim")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the circuit description (JSON)
    #[arg(short = 'f', long)]
    pub circuit: PathBuf,

    /// Switch assignments applied before evaluation, e.g. -s a=1 -s b=0
    #[arg(short = 's', long = "set", value_name = "NAME=0|1")]
    pub sets: Vec<String>,

    /// Maximum propagation passes before tagging the result unstable
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Skip the truth table and only print gate values
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}

impl Args {
    /// Convert command-line arguments into a configured engine
    pub const fn to_engine(&self) -> PropagationEngine {
        PropagationEngine::with_max_passes(self.max_passes)
    }
}
