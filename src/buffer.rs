//! Owned, fixed-length byte blocks passed between pipeline stages.
//!
//! A [`Buffer`] is moved from stage to stage and never shared.  Nothing
//! resizes a buffer in place: compression and truncation consume the input
//! and hand back a new one.

use std::io::Read;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Allocate a zero-filled block of `len` bytes.
    ///
    /// Fails with [`Error::Allocation`] instead of aborting when the request
    /// cannot be satisfied, which matters when `len` comes from an untrusted
    /// framing field.
    pub fn allocate(len: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|e| Error::Allocation(format!("cannot allocate {len} bytes: {e}")))?;
        bytes.resize(len, 0);
        Ok(Self { bytes })
    }

    /// Same as [`Buffer::allocate`] for lengths read from 64-bit fields.
    pub fn allocate_u64(len: u64) -> Result<Self> {
        let len = usize::try_from(len)
            .map_err(|_| Error::Allocation(format!("{len} bytes exceeds the address space")))?;
        Self::allocate(len)
    }

    /// Read exactly `len` bytes from `reader` into a fresh buffer.
    pub fn read_exact_from<R: Read>(mut reader: R, len: u64) -> Result<Self> {
        let mut buf = Self::allocate_u64(len)?;
        reader.read_exact(&mut buf.bytes)?;
        Ok(buf)
    }

    /// Keep the first `len` bytes, consuming `self`.
    pub fn truncated(mut self, len: usize) -> Self {
        self.bytes.truncate(len);
        self
    }

    pub fn len(&self) -> usize { self.bytes.len() }
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }
    pub fn as_slice(&self) -> &[u8] { &self.bytes }
    pub fn as_mut_slice(&mut self) -> &mut [u8] { &mut self.bytes }
    pub fn into_vec(self) -> Vec<u8> { self.bytes }
}

impl From<Vec<u8>> for Buffer {
    /// Takes ownership of `bytes` without copying.
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}
