//! Whole-payload compression with bounds-checked output allocation.
//!
//! Both directions are single-shot: the complete input is held in one
//! [`Buffer`] and the complete output is produced in another.  Inputs must
//! fit in memory.
//!
//! Compression allocates the compressor's documented worst-case bound and
//! truncates to the bytes actually produced.  Decompression allocates exactly
//! the size recorded in the framing and rejects any other outcome, so a
//! truncated or tampered stream never yields a short or overlong file.
//! Either direction of disagreement is a [`Error::SizeMismatch`]; the frame's
//! declared content size is compared up front when the frame carries one.

use crate::buffer::Buffer;
use crate::error::{Error, Result};

/// Level 0 selects the compressor's built-in default.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdCodec {
    pub level: i32,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self { level: DEFAULT_COMPRESSION_LEVEL }
    }
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn compress(&self, input: Buffer) -> Result<Buffer> {
        let capacity = zstd::zstd_safe::compress_bound(input.len());
        let mut out = Buffer::allocate(capacity)?;
        let written = zstd::bulk::compress_to_buffer(input.as_slice(), out.as_mut_slice(), self.level)
            .map_err(|e| Error::Compression(e.to_string()))?;
        log::debug!("compressed {} -> {} bytes (level {})", input.len(), written, self.level);
        Ok(out.truncated(written))
    }

    pub fn decompress(&self, input: Buffer, expected_size: u64) -> Result<Buffer> {
        // A frame that declares its content size is checked before allocating.
        if let Ok(Some(declared)) = zstd::zstd_safe::get_frame_content_size(input.as_slice()) {
            if declared != expected_size {
                return Err(Error::SizeMismatch { expected: expected_size, actual: declared });
            }
        }

        let mut out = Buffer::allocate_u64(expected_size)?;
        let produced = zstd::bulk::decompress_to_buffer(input.as_slice(), out.as_mut_slice())
            .map_err(|e| Error::Compression(e.to_string()))?;
        if produced as u64 != expected_size {
            return Err(Error::SizeMismatch { expected: expected_size, actual: produced as u64 });
        }
        Ok(out)
    }
}

/// Compress with the default level.
pub fn compress(input: Buffer) -> Result<Buffer> {
    ZstdCodec::default().compress(input)
}

/// Inflate `input`, which must expand to exactly `expected_size` bytes.
pub fn decompress(input: Buffer, expected_size: u64) -> Result<Buffer> {
    ZstdCodec::default().decompress(input, expected_size)
}
