//! Payload framing written at the start of the pixel region.
//!
//! ```text
//! [ original_size u64 LE | stored_size u64 LE | payload ... ]
//! ```
//!
//! `stored_size == 0` marks a raw payload of `original_size` bytes.  Any
//! other value is the length of a compressed payload that inflates to
//! exactly `original_size` bytes.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

pub const FRAMING_SIZE: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadFraming {
    pub original_size: u64,
    pub stored_size: u64,
}

impl PayloadFraming {
    pub fn raw(original_size: u64) -> Self {
        Self { original_size, stored_size: 0 }
    }

    pub fn compressed(original_size: u64, stored_size: u64) -> Self {
        debug_assert!(stored_size > 0);
        Self { original_size, stored_size }
    }

    pub fn is_compressed(&self) -> bool {
        self.stored_size != 0
    }

    /// Number of payload bytes that follow the framing.
    pub fn payload_len(&self) -> u64 {
        if self.is_compressed() { self.stored_size } else { self.original_size }
    }

    /// Framing plus payload: the bytes the canvas has to hold.
    pub fn region_len(&self) -> u64 {
        FRAMING_SIZE + self.payload_len()
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u64::<LittleEndian>(self.original_size)?;
        writer.write_u64::<LittleEndian>(self.stored_size)?;
        Ok(())
    }

    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        Ok(Self {
            original_size: reader.read_u64::<LittleEndian>()?,
            stored_size: reader.read_u64::<LittleEndian>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_payload_length_is_original_size() {
        let f = PayloadFraming::raw(10);
        assert!(!f.is_compressed());
        assert_eq!(f.payload_len(), 10);
        assert_eq!(f.region_len(), 26);
    }

    #[test]
    fn compressed_payload_length_is_stored_size() {
        let f = PayloadFraming::compressed(1000, 37);
        assert!(f.is_compressed());
        assert_eq!(f.payload_len(), 37);
    }

    #[test]
    fn wire_order() {
        let mut out = Vec::new();
        PayloadFraming::compressed(10, 3).write(&mut out).unwrap();
        assert_eq!(out.len() as u64, FRAMING_SIZE);
        assert_eq!(&out[..8], &10u64.to_le_bytes());
        assert_eq!(&out[8..], &3u64.to_le_bytes());
        assert_eq!(PayloadFraming::read(&out[..]).unwrap(), PayloadFraming::compressed(10, 3));
    }
}
