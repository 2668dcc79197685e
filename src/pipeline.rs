//! File-level encode and decode: the entry points used by the dispatcher.
//!
//! ```no_run
//! use pixpack::pipeline::{encode_file, decode_file};
//! use pixpack::EncodeOptions;
//!
//! encode_file("notes.txt", "notes.txt.bmp", &EncodeOptions::default())?;
//! decode_file("notes.txt.bmp", "notes.txt")?;
//! # Ok::<(), pixpack::Error>(())
//! ```
//!
//! Each call opens its files right before use and drops them before
//! returning, on success and failure alike.  A failed call leaves the
//! destination with undefined contents.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::buffer::Buffer;
use crate::error::{open_error, Result};
use crate::stream::{self, EncodeOptions, ImageInfo};

pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, options: &EncodeOptions) -> Result<ImageInfo> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let original = read_entire_file(input)?;

    let file = File::create(output).map_err(|e| open_error(output, "writing", e))?;
    let mut writer = BufWriter::new(file);
    let info = stream::write_image(&mut writer, original, options)?;
    writer.flush()?;

    log::info!(
        "encoded {} -> {} ({}x{}, {} bytes{})",
        input.display(), output.display(), info.width, info.height, info.original_size,
        if info.compressed { format!(", {} stored", info.stored_size) } else { String::new() }
    );
    Ok(info)
}

pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<u64> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let file = File::open(input).map_err(|e| open_error(input, "reading", e))?;
    let data = stream::read_image(BufReader::new(file))?;

    let mut out = File::create(output).map_err(|e| open_error(output, "writing", e))?;
    out.write_all(data.as_slice())?;
    out.flush()?;

    log::info!("decoded {} -> {} ({} bytes)", input.display(), output.display(), data.len());
    Ok(data.len() as u64)
}

pub fn inspect_file<P: AsRef<Path>>(input: P) -> Result<ImageInfo> {
    let input = input.as_ref();
    let file = File::open(input).map_err(|e| open_error(input, "reading", e))?;
    stream::inspect(BufReader::new(file))
}

fn read_entire_file(path: &Path) -> Result<Buffer> {
    let file = File::open(path).map_err(|e| open_error(path, "reading", e))?;
    let len = file.metadata()?.len();
    Buffer::read_exact_from(file, len)
}
