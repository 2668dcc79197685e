//! Per-path dispatch by file name.
//!
//! A path ending in [`IMAGE_SUFFIX`] is decoded to the same path without the
//! suffix; any other path is encoded to the path with the suffix appended.
//! Files are independent jobs.  With the `parallel` feature they run on the
//! Rayon pool, otherwise one after another; either way every input gets its
//! own outcome and one failure never masks another file's result.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pipeline::{decode_file, encode_file};
use crate::stream::EncodeOptions;

pub const IMAGE_SUFFIX: &str = ".bmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Encode { input: PathBuf, output: PathBuf },
    Decode { input: PathBuf, output: PathBuf },
}

impl Job {
    pub fn plan(path: &Path) -> Self {
        match decoded_path(path) {
            Some(output) => Job::Decode { input: path.to_owned(), output },
            None => Job::Encode { input: path.to_owned(), output: encoded_path(path) },
        }
    }

    pub fn input(&self) -> &Path {
        match self {
            Job::Encode { input, .. } | Job::Decode { input, .. } => input,
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            Job::Encode { output, .. } | Job::Decode { output, .. } => output,
        }
    }

    pub fn run(&self, options: &EncodeOptions) -> Result<()> {
        match self {
            Job::Encode { input, output } => encode_file(input, output, options).map(|_| ()),
            Job::Decode { input, output } => decode_file(input, output).map(|_| ()),
        }
    }
}

/// `path` with [`IMAGE_SUFFIX`] appended.
pub fn encoded_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(IMAGE_SUFFIX);
    PathBuf::from(name)
}

/// `path` without [`IMAGE_SUFFIX`], or `None` if it does not carry it.
///
/// Works on the raw `OsStr`, so file names that are not valid UTF-8 follow
/// the same rule.  A bare `.bmp` file name has no stem and is not an image.
pub fn decoded_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.as_encoded_bytes();
    let stem = name.strip_suffix(IMAGE_SUFFIX.as_bytes())?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_extension(""))
}

#[derive(Debug)]
pub struct Outcome {
    pub job: Job,
    pub result: Result<()>,
}

pub fn process_path(path: &Path, options: &EncodeOptions) -> Outcome {
    let job = Job::plan(path);
    let result = job.run(options);
    if let Err(e) = &result {
        log::warn!("{}: {e}", job.input().display());
    }
    Outcome { job, result }
}

/// Run every path and return one outcome per input, in input order.
pub fn process_all(paths: &[PathBuf], options: &EncodeOptions) -> Vec<Outcome> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        paths.par_iter().map(|p| process_path(p, options)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        paths.iter().map(|p| process_path(p, options)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_by_suffix() {
        assert_eq!(
            Job::plan(Path::new("dir/report.pdf")),
            Job::Encode { input: "dir/report.pdf".into(), output: "dir/report.pdf.bmp".into() }
        );
        assert_eq!(
            Job::plan(Path::new("dir/report.pdf.bmp")),
            Job::Decode { input: "dir/report.pdf.bmp".into(), output: "dir/report.pdf".into() }
        );
    }

    #[test]
    fn suffix_alone_is_not_an_image_name() {
        assert_eq!(decoded_path(Path::new(".bmp")), None);
        assert_eq!(decoded_path(Path::new("photo.BMP")), None);
        assert_eq!(decoded_path(Path::new("dir/.bmp")), None);
        assert_eq!(decoded_path(Path::new("dir/a..bmp")), Some(PathBuf::from("dir/a.")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_follow_the_suffix_rule() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let image = Path::new(OsStr::from_bytes(b"caf\xe9.txt.bmp"));
        let plain = Path::new(OsStr::from_bytes(b"caf\xe9.txt"));
        assert_eq!(decoded_path(image), Some(plain.to_path_buf()));
        assert_eq!(
            Job::plan(image),
            Job::Decode { input: image.to_path_buf(), output: plain.to_path_buf() }
        );
        assert_eq!(encoded_path(plain), image);
    }
}
