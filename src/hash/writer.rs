//! Canonical byte encoding feeding a SHA-256 digest.

use std::fmt;

use sha2::{Digest, Sha256};

/// Uppercase hex SHA-256 fingerprint of a node's own attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(format!("{:X}", Sha256::digest(data)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ContentHash {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A value that writes its hashable fields, in a fixed order, to a
/// [`HashWriter`].
///
/// Handle fields (parent, child lists) are never written.
pub trait Hashable {
    fn hash_into(&self, w: &mut HashWriter);
}

/// Growing buffer of canonically encoded scalars.
///
/// Text is length-prefixed UTF-8, numbers are little-endian, options carry
/// a presence byte and sequences a length prefix, so adjacent fields can
/// never run into each other.
#[derive(Debug, Default)]
pub struct HashWriter {
    buf: Vec<u8>,
}

impl HashWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn bool(&mut self, v: bool) -> &mut Self {
        self.u8(u8::from(v))
    }

    pub fn count(&mut self, n: usize) -> &mut Self {
        self.u32(u32::try_from(n).unwrap_or(u32::MAX))
    }

    pub fn bytes(&mut self, v: &[u8]) -> &mut Self {
        self.count(v.len());
        self.buf.extend_from_slice(v);
        self
    }

    pub fn str(&mut self, v: &str) -> &mut Self {
        self.bytes(v.as_bytes())
    }

    pub fn opt_str(&mut self, v: Option<&str>) -> &mut Self {
        match v {
            Some(s) => self.u8(1).str(s),
            None => self.u8(0),
        }
    }

    pub fn value<T: Hashable + ?Sized>(&mut self, v: &T) -> &mut Self {
        v.hash_into(self);
        self
    }

    pub fn opt<T: Hashable>(&mut self, v: Option<&T>) -> &mut Self {
        match v {
            Some(inner) => self.u8(1).value(inner),
            None => self.u8(0),
        }
    }

    pub fn seq<T: Hashable>(&mut self, items: &[T]) -> &mut Self {
        self.count(items.len());
        for item in items {
            item.hash_into(self);
        }
        self
    }

    /// Number of bytes written so far.
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(self) -> ContentHash {
        ContentHash::from_bytes(&self.buf)
    }
}
