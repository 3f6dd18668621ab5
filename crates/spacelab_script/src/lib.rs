//! SpaceLab Decoder scripting system
//!
//! Embeds the CPython interpreter that hosts the decoder application.
//!
//! ## Architecture
//!
//! - **Program identity:** `argv[0]` decoded into the wide form the
//!   interpreter expects, owned for the process lifetime
//! - **Runtime:** one-time process-wide initialize/finalize pair wrapping
//!   script execution
//!
//! The interpreter is an opaque collaborator: scripts are fed in as top-level
//! programs and nothing structured comes back.

pub mod program;
pub mod runtime;

pub use program::ProgramName;
pub use runtime::ScriptRuntime;

pub use pyo3;

/// Launcher version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
