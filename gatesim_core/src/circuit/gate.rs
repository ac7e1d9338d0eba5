use std::fmt;

use crate::circuit::gate_id::GateId;
use crate::circuit::gate_kind::GateKind;
use crate::circuit::port::InputPort;

/// Input values of a gate, shaped by the kind's fixed arity.
///
/// A unary gate physically cannot hold an `input2`; the variant carried by a
/// [`Gate`] always matches its kind's arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateInputs {
    /// A source gate: no input ports.
    None,
    /// A single-input gate.
    One {
        /// Value currently latched on `input1`.
        input1: bool,
    },
    /// A two-input gate.
    Two {
        /// Value currently latched on `input1`.
        input1: bool,
        /// Value currently latched on `input2`.
        input2: bool,
    },
}

impl GateInputs {
    /// All-low inputs of the shape declared by `kind`.
    #[must_use]
    pub const fn low_for(kind: GateKind) -> Self {
        match kind.arity() {
            0 => Self::None,
            1 => Self::One { input1: false },
            _ => Self::Two {
                input1: false,
                input2: false,
            },
        }
    }

    /// Number of input slots carried by this shape.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::None => 0,
            Self::One { .. } => 1,
            Self::Two { .. } => 2,
        }
    }

    /// Reads a port value; `None` if the shape does not declare the port.
    #[must_use]
    pub const fn get(self, port: InputPort) -> Option<bool> {
        match (self, port) {
            (Self::One { input1 } | Self::Two { input1, .. }, InputPort::Input1) => Some(input1),
            (Self::Two { input2, .. }, InputPort::Input2) => Some(input2),
            _ => None,
        }
    }
}

/// A placed gate: identity, kind, latched port values, current output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gate {
    id: GateId,
    kind: GateKind,
    inputs: GateInputs,
    output: bool,
}

impl Gate {
    /// Fresh gate with all-low inputs and low output.
    pub(crate) const fn new(id: GateId, kind: GateKind) -> Self {
        Self {
            id,
            kind,
            inputs: GateInputs::low_for(kind),
            output: false,
        }
    }

    /// The gate's circuit-unique id.
    #[must_use]
    pub const fn id(&self) -> GateId {
        self.id
    }

    /// The gate's kind.
    #[must_use]
    pub const fn kind(&self) -> GateKind {
        self.kind
    }

    /// Latched input values, shaped by the kind's arity.
    #[must_use]
    pub const fn inputs(&self) -> GateInputs {
        self.inputs
    }

    /// Value currently latched on `input1`, if the kind declares it.
    #[must_use]
    pub const fn input1(&self) -> Option<bool> {
        self.inputs.get(InputPort::Input1)
    }

    /// Value currently latched on `input2`, if the kind declares it.
    #[must_use]
    pub const fn input2(&self) -> Option<bool> {
        self.inputs.get(InputPort::Input2)
    }

    /// Current output value. For a `Switch` this is its externally set state.
    #[must_use]
    pub const fn output(&self) -> bool {
        self.output
    }

    pub(crate) const fn set_output(&mut self, value: bool) {
        self.output = value;
    }

    pub(crate) const fn set_signals(&mut self, inputs: GateInputs, output: bool) {
        self.inputs = inputs;
        self.output = output;
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}={}", self.kind, self.id, u8::from(self.output))
    }
}
