use contracts::*;
use std::fmt;
use std::hash::Hash;

/// Identifier of a connection, stable and unique within one [`Circuit`].
///
/// [`Circuit`]: crate::Circuit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId {
    /// The underlying raw integer id.
    inner: u32,
}

impl ConnectionId {
    /// Creates a connection id from a raw integer.
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

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.inner)
    }
}

impl From<u32> for ConnectionId {
    #[inline]
    fn from(id: u32) -> Self {
        Self { inner: id }
    }
}

impl From<ConnectionId> for u32 {
    #[inline]
    fn from(id: ConnectionId) -> Self {
        id.inner
    }
}
