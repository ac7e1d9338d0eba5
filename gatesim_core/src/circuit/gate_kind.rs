use std::fmt;
use std::fmt::Formatter;
use std::hash::Hash;
use std::str::FromStr;

use crate::circuit::port::InputPort;

/// Categorizes the closed set of gate primitives the sandbox can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GateKind {
    /// Two-input logical AND.
    And,
    /// Two-input logical OR.
    Or,
    /// Two-input exclusive OR.
    Xor,
    /// Single-input inverter.
    Not,
    /// Single-input identity pass-through; marks an observable sink.
    Output,
    /// Source gate with no inputs; its output is externally settable state.
    Switch,
}

impl GateKind {
    /// Number of declared input ports for this kind.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::And | Self::Or | Self::Xor => 2,
            Self::Not | Self::Output => 1,
            Self::Switch => 0,
        }
    }

    /// The input ports a gate of this kind declares, in port order.
    #[must_use]
    pub const fn input_ports(self) -> &'static [InputPort] {
        match self {
            Self::And | Self::Or | Self::Xor => &[InputPort::Input1, InputPort::Input2],
            Self::Not | Self::Output => &[InputPort::Input1],
            Self::Switch => &[],
        }
    }

    /// Returns true if `port` is declared by this kind.
    #[must_use]
    pub const fn declares(self, port: InputPort) -> bool {
        match port {
            InputPort::Input1 => self.arity() >= 1,
            InputPort::Input2 => self.arity() >= 2,
        }
    }

    /// Returns true if the kind is a circuit-level source (a switch).
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Switch)
    }

    /// Returns true if the kind is a circuit-level sink marker.
    #[must_use]
    pub const fn is_sink(self) -> bool {
        matches!(self, Self::Output)
    }

    /// Returns true if the kind derives its output from its inputs.
    #[must_use]
    pub const fn is_logic(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor | Self::Not | Self::Output)
    }

    /// Applies this kind's boolean function.
    ///
    /// Single-input kinds ignore `input2`. Returns `None` for [`Self::Switch`],
    /// whose output is externally set rather than derived.
    #[must_use]
    pub const fn apply(self, input1: bool, input2: bool) -> Option<bool> {
        match self {
            Self::And => Some(input1 && input2),
            Self::Or => Some(input1 || input2),
            Self::Xor => Some(input1 != input2),
            Self::Not => Some(!input1),
            Self::Output => Some(input1),
            Self::Switch => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "xor" => Ok(Self::Xor),
            "not" => Ok(Self::Not),
            "output" => Ok(Self::Output),
            "switch" => Ok(Self::Switch),
            other => Err(format!("unknown gate kind: {other}")),
        }
    }
}
