//! Value Capability Module
//!
//! The single contract a cached value must satisfy: report its size in bytes.

// == Value ==
/// A value that can be stored in a [`Cache`](crate::cache::Cache).
///
/// `size` must be stable for a given instance. A value whose reported size
/// changes after insertion corrupts the cache's byte accounting.
pub trait Value {
    /// Number of bytes this value occupies.
    fn size(&self) -> usize;
}

impl Value for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Value for &'static str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Value for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Value for Box<[u8]> {
    fn size(&self) -> usize {
        self.len()
    }
}
