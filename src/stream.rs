//! Image writer and reader over arbitrary byte streams.
//!
//! # Writer
//! [`write_image`] takes ownership of the original bytes, optionally
//! compresses them, sizes a canvas for framing plus payload, and emits
//! header, framing, payload and zero padding in that order.  Exactly
//! `HEADER_SIZE + pixels_size` bytes are written.
//!
//! # Reader
//! [`read_image`] steps over the header without checking it, reads the
//! framing, then reads exactly the payload the framing announces.  Padding
//! is never touched.

use serde::Serialize;
use std::io::{self, Read, Write};

use crate::buffer::Buffer;
use crate::codec::{ZstdCodec, DEFAULT_COMPRESSION_LEVEL};
use crate::error::Result;
use crate::framing::PayloadFraming;
use crate::header::ContainerHeader;
use crate::layout::Canvas;

/// Configuration for [`write_image`] and the file pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub compress: bool,
    /// Compressor level; 0 keeps the compressor's default.
    pub level: i32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compress: true,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl EncodeOptions {
    pub fn raw() -> Self {
        Self { compress: false, ..Self::default() }
    }
}

/// Summary of an encoded image, as written or as read back by [`inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
    pub file_size: u32,
    pub pixels_size: u32,
    pub original_size: u64,
    pub stored_size: u64,
    pub compressed: bool,
}

impl ImageInfo {
    fn new(header: &ContainerHeader, framing: &PayloadFraming) -> Self {
        Self {
            width: header.width,
            height: header.height,
            file_size: header.file_size,
            pixels_size: header.pixels_size,
            original_size: framing.original_size,
            stored_size: framing.stored_size,
            compressed: framing.is_compressed(),
        }
    }
}

pub fn write_image<W: Write>(mut writer: W, original: Buffer, options: &EncodeOptions) -> Result<ImageInfo> {
    let original_size = original.len() as u64;

    let (framing, payload) = if options.compress {
        let packed = ZstdCodec::new(options.level).compress(original)?;
        (PayloadFraming::compressed(original_size, packed.len() as u64), packed)
    } else {
        (PayloadFraming::raw(original_size), original)
    };

    let used = framing.region_len();
    let canvas = Canvas::for_payload(used);
    let header = ContainerHeader::for_canvas(canvas)?;
    log::debug!(
        "canvas {}x{} for {} bytes ({} padding)",
        canvas.width, canvas.height, used, canvas.padding_for(used)
    );

    header.write(&mut writer)?;
    framing.write(&mut writer)?;
    writer.write_all(payload.as_slice())?;

    let padding = canvas.padding_for(used);
    io::copy(&mut io::repeat(0).take(padding), &mut writer)?;

    Ok(ImageInfo::new(&header, &framing))
}

pub fn read_image<R: Read>(mut reader: R) -> Result<Buffer> {
    let header = ContainerHeader::read(&mut reader)?;
    let framing = PayloadFraming::read(&mut reader)?;
    log::debug!(
        "reading {}x{} image: original {} bytes, stored {}",
        header.width, header.height, framing.original_size, framing.stored_size
    );

    let payload = Buffer::read_exact_from(&mut reader, framing.payload_len())?;
    if framing.is_compressed() {
        ZstdCodec::default().decompress(payload, framing.original_size)
    } else {
        Ok(payload)
    }
}

/// Read header and framing only.
pub fn inspect<R: Read>(mut reader: R) -> Result<ImageInfo> {
    let header = ContainerHeader::read(&mut reader)?;
    let framing = PayloadFraming::read(&mut reader)?;
    Ok(ImageInfo::new(&header, &framing))
}
