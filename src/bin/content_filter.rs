//! content-filter - teen-safe image classification CLI
//!
//! Reads one base64 image payload, prints one JSON verdict line on
//! stdout, and exits 0 for every completed classification — including
//! negative verdicts and internal errors collapsed to fail-closed
//! verdicts. Only a wrong argument count exits 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use content_filter::{check_image, FilterConfig, TractBackend, Verdict};

const USAGE_MESSAGE: &str = "Usage: content-filter <base64_image_data>";

const SERIALIZATION_FALLBACK: &str =
    "{\"appropriate\":false,\"scores\":{},\"message\":\"Content filtering error: verdict serialization failed\"}";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base64-encoded image payload (optionally a data: URI).
    image_data: String,

    /// Path to the nudity-detection ONNX model.
    #[arg(long)]
    model: Option<PathBuf>,

    /// TOML file with detector runtime settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            emit(&Verdict::usage(USAGE_MESSAGE));
            return ExitCode::FAILURE;
        }
    };

    emit(&run(&args));
    ExitCode::SUCCESS
}

/// Classification is fail-closed end to end: configuration and model
/// errors produce a negative verdict on stdout, not a nonzero exit.
fn run(args: &Args) -> Verdict {
    let config = match FilterConfig::load(args.config.as_deref(), args.model.as_deref()) {
        Ok(config) => config,
        Err(e) => return Verdict::fail_closed(&e),
    };

    let mut backend = match TractBackend::new(&config) {
        Ok(backend) => backend,
        Err(e) => return Verdict::fail_closed(&e),
    };

    check_image(&mut backend, &args.image_data)
}

fn emit(verdict: &Verdict) {
    match serde_json::to_string(verdict) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            log::error!("verdict serialization failed: {e}");
            println!("{SERIALIZATION_FALLBACK}");
        }
    }
}
