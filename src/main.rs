use clap::{Args, Parser, Subcommand};
use pixpack::codec::DEFAULT_COMPRESSION_LEVEL;
use pixpack::dispatch::{self, Job};
use pixpack::pipeline::{decode_file, encode_file, inspect_file};
use pixpack::EncodeOptions;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pixpack", version, about = "Hide any file inside a valid 32-bit BMP image")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct CompressArgs {
    /// Store the payload verbatim instead of zstd-compressing it
    #[arg(long)]
    no_compress: bool,
    /// Zstd level (1-22; 0 = library default)
    #[arg(short, long, default_value_t = DEFAULT_COMPRESSION_LEVEL)]
    level: i32,
}

impl From<CompressArgs> for EncodeOptions {
    fn from(a: CompressArgs) -> Self {
        EncodeOptions { compress: !a.no_compress, level: a.level }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a file in a BMP image
    Encode {
        input: PathBuf,
        /// Defaults to INPUT with ".bmp" appended
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        compress: CompressArgs,
    },
    /// Recover the embedded file from a BMP image
    Decode {
        input: PathBuf,
        /// Defaults to INPUT with ".bmp" stripped
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show header and framing of an encoded image
    Inspect {
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Decode every *.bmp path, encode everything else
    Auto {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        compress: CompressArgs,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {

        // ── Encode ───────────────────────────────────────────────────────────
        Commands::Encode { input, output, compress } => {
            let output = output.unwrap_or_else(|| dispatch::encoded_path(&input));
            let info = encode_file(&input, &output, &compress.into())?;
            println!("Created: {} ({}x{})", output.display(), info.width, info.height);
        }

        // ── Decode ───────────────────────────────────────────────────────────
        Commands::Decode { input, output } => {
            let output = match output.or_else(|| dispatch::decoded_path(&input)) {
                Some(p) => p,
                None => {
                    eprintln!("'{}' has no .bmp suffix; pass --output", input.display());
                    return Ok(ExitCode::FAILURE);
                }
            };
            let n = decode_file(&input, &output)?;
            println!("Recovered: {} ({} bytes)", output.display(), n);
        }

        // ── Inspect ──────────────────────────────────────────────────────────
        Commands::Inspect { input, json } => {
            let info = inspect_file(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("── {} ──", input.display());
                println!("  Canvas         {}x{} px", info.width, info.height);
                println!("  File size      {} B", info.file_size);
                println!("  Pixel data     {} B", info.pixels_size);
                println!("  Original size  {} B", info.original_size);
                if info.compressed {
                    println!("  Stored size    {} B (zstd)", info.stored_size);
                } else {
                    println!("  Stored size    raw");
                }
            }
        }

        // ── Auto ─────────────────────────────────────────────────────────────
        Commands::Auto { files, compress } => {
            let outcomes = dispatch::process_all(&files, &compress.into());
            let mut failed = 0usize;
            for o in &outcomes {
                let verb = match o.job {
                    Job::Encode { .. } => "encoded",
                    Job::Decode { .. } => "decoded",
                };
                match &o.result {
                    Ok(()) => println!("  {verb}  {} -> {}", o.job.input().display(), o.job.output().display()),
                    Err(e) => {
                        failed += 1;
                        eprintln!("  failed   {}: {e}", o.job.input().display());
                    }
                }
            }
            if failed > 0 {
                eprintln!("{failed} of {} file(s) failed", outcomes.len());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
