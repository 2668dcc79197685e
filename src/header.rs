//! Fixed 54-byte bitmap header: BITMAPFILEHEADER followed by BITMAPINFOHEADER.
//!
//! # Layout (little-endian, packed)
//! | off | field              | width |
//! |-----|--------------------|-------|
//! |  0  | magic `BM`         | 2     |
//! |  2  | file_size          | 4     |
//! |  6  | reserved0          | 2     |
//! |  8  | reserved1          | 2     |
//! | 10  | pixel_offset       | 4     |
//! | 14  | info_header_size   | 4     |
//! | 18  | width  (i32)       | 4     |
//! | 22  | height (i32)       | 4     |
//! | 26  | planes             | 2     |
//! | 28  | bit_depth          | 2     |
//! | 30  | compression_method | 4     |
//! | 34  | pixels_size        | 4     |
//! | 38  | h_res  (i32)       | 4     |
//! | 42  | v_res  (i32)       | 4     |
//! | 46  | palette_colors     | 4     |
//! | 50  | important_colors   | 4     |
//!
//! Fields are serialized one by one; the in-memory struct layout is never
//! written directly.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::error::{too_large, Result};
use crate::layout::Canvas;

/// `BM` read as a little-endian u16.
pub const MAGIC: u16 = 0x4D42;
pub const HEADER_SIZE: usize = 54;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const BYTES_PER_PIXEL: u32 = 4;
pub const BIT_DEPTH: u16 = (BYTES_PER_PIXEL * 8) as u16;
/// 72 DPI expressed in pixels per metre.
pub const RESOLUTION: i32 = 2835;
/// BI_RGB: raw pixel data.  Says nothing about the embedded payload.
pub const COMPRESSION_RGB: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub magic: u16,
    pub file_size: u32,
    pub reserved0: u16,
    pub reserved1: u16,
    pub pixel_offset: u32,
    pub info_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_depth: u16,
    pub compression_method: u32,
    pub pixels_size: u32,
    pub h_res: i32,
    pub v_res: i32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl ContainerHeader {
    /// Derive every size field from the canvas dimensions.
    ///
    /// Fails when the canvas is too large for the 32-bit header fields.
    pub fn for_canvas(canvas: Canvas) -> Result<Self> {
        let width = i32::try_from(canvas.width).map_err(|_| too_large("canvas width", canvas.width))?;
        let height = i32::try_from(canvas.height).map_err(|_| too_large("canvas height", canvas.height))?;
        let pixels = canvas.pixels_size();
        let pixels_size = u32::try_from(pixels).map_err(|_| too_large("pixel data size", pixels))?;
        let total = pixels + HEADER_SIZE as u64;
        let file_size = u32::try_from(total).map_err(|_| too_large("file size", total))?;

        Ok(Self {
            magic: MAGIC,
            file_size,
            reserved0: 0,
            reserved1: 0,
            pixel_offset: HEADER_SIZE as u32,
            info_header_size: INFO_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bit_depth: BIT_DEPTH,
            compression_method: COMPRESSION_RGB,
            pixels_size,
            h_res: RESOLUTION,
            v_res: RESOLUTION,
            palette_colors: 0,
            important_colors: 0,
        })
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.magic)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u16::<LittleEndian>(self.reserved0)?;
        writer.write_u16::<LittleEndian>(self.reserved1)?;
        writer.write_u32::<LittleEndian>(self.pixel_offset)?;
        writer.write_u32::<LittleEndian>(self.info_header_size)?;
        writer.write_i32::<LittleEndian>(self.width)?;
        writer.write_i32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bit_depth)?;
        writer.write_u32::<LittleEndian>(self.compression_method)?;
        writer.write_u32::<LittleEndian>(self.pixels_size)?;
        writer.write_i32::<LittleEndian>(self.h_res)?;
        writer.write_i32::<LittleEndian>(self.v_res)?;
        writer.write_u32::<LittleEndian>(self.palette_colors)?;
        writer.write_u32::<LittleEndian>(self.important_colors)?;
        Ok(())
    }

    /// Read the header as-is.  No field is validated: the decoder only needs
    /// to get past it to reach the framing.
    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        Ok(Self {
            magic: reader.read_u16::<LittleEndian>()?,
            file_size: reader.read_u32::<LittleEndian>()?,
            reserved0: reader.read_u16::<LittleEndian>()?,
            reserved1: reader.read_u16::<LittleEndian>()?,
            pixel_offset: reader.read_u32::<LittleEndian>()?,
            info_header_size: reader.read_u32::<LittleEndian>()?,
            width: reader.read_i32::<LittleEndian>()?,
            height: reader.read_i32::<LittleEndian>()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bit_depth: reader.read_u16::<LittleEndian>()?,
            compression_method: reader.read_u32::<LittleEndian>()?,
            pixels_size: reader.read_u32::<LittleEndian>()?,
            h_res: reader.read_i32::<LittleEndian>()?,
            v_res: reader.read_i32::<LittleEndian>()?,
            palette_colors: reader.read_u32::<LittleEndian>()?,
            important_colors: reader.read_u32::<LittleEndian>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_follow_the_canvas() {
        let header = ContainerHeader::for_canvas(Canvas { width: 4, height: 2 }).unwrap();
        assert_eq!(header.pixels_size, 32);
        assert_eq!(header.file_size, 32 + HEADER_SIZE as u32);
        assert_eq!(header.pixel_offset, HEADER_SIZE as u32);
        assert_eq!(header.bit_depth, 32);
    }

    #[test]
    fn serialized_length_and_offsets() {
        let header = ContainerHeader::for_canvas(Canvas { width: 8, height: 3 }).unwrap();
        let mut out = Vec::new();
        header.write(&mut out).unwrap();
        assert_eq!(out.len(), HEADER_SIZE);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(out[2..6].try_into().unwrap()), 96 + 54);
        assert_eq!(u32::from_le_bytes(out[10..14].try_into().unwrap()), 54);
        assert_eq!(u32::from_le_bytes(out[14..18].try_into().unwrap()), 40);
        assert_eq!(i32::from_le_bytes(out[18..22].try_into().unwrap()), 8);
        assert_eq!(i32::from_le_bytes(out[22..26].try_into().unwrap()), 3);
        assert_eq!(u16::from_le_bytes(out[26..28].try_into().unwrap()), 1);
        assert_eq!(u16::from_le_bytes(out[28..30].try_into().unwrap()), 32);
        assert_eq!(u32::from_le_bytes(out[34..38].try_into().unwrap()), 96);
        assert_eq!(i32::from_le_bytes(out[38..42].try_into().unwrap()), 2835);
        assert_eq!(i32::from_le_bytes(out[42..46].try_into().unwrap()), 2835);
        assert_eq!(&out[46..54], &[0u8; 8]);

        assert_eq!(ContainerHeader::read(&out[..]).unwrap(), header);
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert!(ContainerHeader::for_canvas(Canvas { width: 1 << 16, height: 1 << 16 }).is_err());
    }
}
