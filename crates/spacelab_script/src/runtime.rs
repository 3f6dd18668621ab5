//! Script runtime management
//!
//! Wraps the process-wide CPython runtime: one initialize/finalize pair per
//! process, with top-level script execution in between.

use std::ffi::CString;
use std::fs;
use std::path::Path;

use pyo3::ffi;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use thiserror::Error;

use crate::program::ProgramName;

/// Interpreter teardown reported a failure (e.g. flushing buffered output).
#[derive(Debug, Error)]
#[error("interpreter finalization failed")]
pub struct FinalizeError;

/// Process-wide embedded interpreter.
///
/// Exactly one instance per process: `init` performs the one-time runtime
/// initialization and `finalize` consumes the instance to tear it down.
pub struct ScriptRuntime {
    _private: (),
}

impl ScriptRuntime {
    /// Initialize the interpreter, registering `program` as its self-reported
    /// name. Registration must precede initialization to be picked up.
    ///
    /// Initialization failure aborts the process inside the runtime itself;
    /// there is no recovery path to offer callers.
    #[allow(deprecated)] // Py_SetProgramName, kept for parity with the installed interpreter
    pub fn init(program: &ProgramName) -> Self {
        unsafe { ffi::Py_SetProgramName(program.as_ptr()) };
        Python::initialize();
        Self { _private: () }
    }

    /// Run the file at `path` as a top-level `__main__` program.
    ///
    /// The path is the script's display name in tracebacks. A file that
    /// cannot be read (e.g. removed since the existence check) is skipped
    /// silently. Errors raised inside the script are reported through the
    /// interpreter's own default mechanism and not surfaced to the caller.
    pub fn run_file(&self, path: &Path) {
        let source = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "script not readable, nothing to run");
                return;
            }
        };

        let Ok(source) = CString::new(source) else {
            tracing::warn!(path = %path.display(), "script contains NUL bytes, nothing to run");
            return;
        };
        let Ok(display_name) = CString::new(path.as_os_str().as_encoded_bytes()) else {
            tracing::warn!(path = %path.display(), "script path contains NUL bytes, nothing to run");
            return;
        };

        Python::attach(|py| {
            if let Err(err) = PyModule::from_code(py, &source, &display_name, c"__main__") {
                // Default interpreter reporting: traceback to stderr, and the
                // interpreter's own handling of an uncaught SystemExit.
                err.print(py);
            }
        });
    }

    /// Tear the interpreter down.
    pub fn finalize(self) -> Result<(), FinalizeError> {
        if unsafe { ffi::Py_FinalizeEx() } < 0 {
            return Err(FinalizeError);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    // Single test for the whole lifecycle: the interpreter is process-wide,
    // so init, execution, the missing-file no-op and finalize share one run.
    #[test]
    fn test_runtime_lifecycle_runs_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("main.py");
        let marker = dir.path().join("marker.txt");
        fs::write(
            &script,
            format!(
                "with open('{}', 'w') as out:\n    out.write('ran')\n",
                marker.display()
            ),
        )
        .unwrap();

        let program = ProgramName::decode(OsStr::new("spacelab-decoder")).unwrap();
        let runtime = ScriptRuntime::init(&program);

        runtime.run_file(&dir.path().join("absent.py"));
        assert!(!marker.exists());

        runtime.run_file(&script);
        assert_eq!(fs::read_to_string(&marker).unwrap(), "ran");

        runtime.finalize().unwrap();
    }
}
