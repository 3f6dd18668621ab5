//! SpaceLab Decoder launcher
//!
//! Minimal binary that embeds the Python runtime and boots the decoder
//! application script.

use std::env;
use std::process::ExitCode;

use spacelab_script::{ProgramName, ScriptRuntime};

mod locate;

/// `argv[0]` could not be decoded for the interpreter.
const EXIT_BAD_PROGRAM_NAME: u8 = 1;
/// Interpreter teardown reported a failure.
const EXIT_FINALIZE_FAILED: u8 = 120;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::debug!("SpaceLab Decoder launcher v{}", spacelab_script::VERSION);

    // Fatal before any interpreter state exists; `program` must outlive the
    // runtime, so it is declared first and released last by drop order.
    let arg0 = env::args_os().next().unwrap_or_default();
    let program = match ProgramName::decode(&arg0) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Fatal error: cannot decode argv[0]: {err}");
            return ExitCode::from(EXIT_BAD_PROGRAM_NAME);
        }
    };

    let runtime = ScriptRuntime::init(&program);

    match locate::main_script() {
        Some(script) => {
            tracing::debug!(script = %script.display(), "running decoder script");
            runtime.run_file(&script);
        }
        None => tracing::debug!("no decoder script installed, nothing to run"),
    }

    if runtime.finalize().is_err() {
        return ExitCode::from(EXIT_FINALIZE_FAILED);
    }

    ExitCode::SUCCESS
}
