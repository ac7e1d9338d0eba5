use contracts::*;
use std::fmt;
use std::hash::Hash;

/// Identifier of a gate, stable and unique within one [`Circuit`].
///
/// Allocated monotonically by the owning circuit; never reused even after
/// the gate is removed.
///
/// [`Circuit`]: crate::Circuit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId {
    /// The underlying raw integer id.
    inner: u32,
}

impl GateId {
    /// Creates a gate id from a raw integer.
    #[ensures(ret.inner == id)]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the id as a usize for indexing.
    #[ensures(ret == self.inner as usize)]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.inner)
    }
}

impl From<u32> for GateId {
    #[inline]
    fn from(id: u32) -> Self {
        Self { inner: id }
    }
}

impl From<GateId> for u32 {
    #[inline]
    fn from(id: GateId) -> Self {
        id.inner
    }
}

impl From<GateId> for usize {
    #[inline]
    fn from(id: GateId) -> Self {
        id.inner as Self
    }
}
