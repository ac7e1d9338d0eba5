use std::fmt;
use std::str::FromStr;

/// Named input port of a gate.
///
/// Which ports exist for a given gate is fixed by its [`GateKind`] arity;
/// `Input2` is only declared by two-input kinds.
///
/// [`GateKind`]: crate::GateKind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputPort {
    /// First (and for unary gates, only) input.
    Input1,
    /// Second input of a two-input gate.
    Input2,
}

impl InputPort {
    /// Zero-based position of the port.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Input1 => 0,
            Self::Input2 => 1,
        }
    }
}

impl fmt::Display for InputPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input1 => write!(f, "input1"),
            Self::Input2 => write!(f, "input2"),
        }
    }
}

impl FromStr for InputPort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "input1" => Ok(Self::Input1),
            "input2" => Ok(Self::Input2),
            other => Err(format!("unknown input port: {other}")),
        }
    }
}
