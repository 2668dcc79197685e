//! Embed arbitrary file bytes in a valid, openable 32-bit BMP image.
//!
//! An encoded image is a 54-byte bitmap header, a 16-byte framing
//! (`original_size`, `stored_size`), the payload (raw, or zstd-compressed when
//! `stored_size != 0`) and zero padding up to the declared pixel size.  The
//! canvas is sized near-square with a width aligned to 4 pixels, so the
//! file opens in any image viewer.

pub mod buffer;
pub mod error;
pub mod codec;
pub mod header;
pub mod framing;
pub mod layout;
pub mod stream;
pub mod pipeline;
pub mod dispatch;

pub use buffer::Buffer;
pub use error::{Error, Result};
pub use header::{ContainerHeader, HEADER_SIZE};
pub use framing::{PayloadFraming, FRAMING_SIZE};
pub use layout::{calculate_size, Canvas};
pub use stream::{EncodeOptions, ImageInfo, read_image, write_image};
pub use pipeline::{encode_file, decode_file, inspect_file};
