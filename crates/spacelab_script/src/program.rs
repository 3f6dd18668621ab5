//! Program identity handed to the interpreter
//!
//! The interpreter wants `argv[0]` as a wide-character string allocated by
//! its own allocator. `ProgramName` owns that allocation for the process
//! lifetime and frees it on drop.

use std::ffi::{CString, NulError, OsStr};
use std::ptr::NonNull;

use libc::wchar_t;
use pyo3::ffi;
use thiserror::Error;

/// Errors from turning `argv[0]` into an interpreter program name.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("program path contains an interior NUL byte")]
    InteriorNul(#[from] NulError),

    #[error("cannot decode program path in the current locale")]
    Undecodable,
}

/// Wide-character program identity registered with the interpreter.
///
/// Must outlive the interpreter; the launcher keeps it alive until after
/// finalization and drop order takes care of the release.
#[derive(Debug)]
pub struct ProgramName {
    ptr: NonNull<wchar_t>,
}

impl ProgramName {
    /// Decode `argv[0]` with the interpreter's locale-aware decoder.
    ///
    /// Safe to call before interpreter initialization; the launcher relies on
    /// that to fail fast without touching any process-wide runtime state.
    pub fn decode(arg0: &OsStr) -> Result<Self, DecodeError> {
        let raw = CString::new(arg0.as_encoded_bytes())?;
        let ptr = unsafe { ffi::Py_DecodeLocale(raw.as_ptr(), std::ptr::null_mut()) };
        NonNull::new(ptr)
            .map(|ptr| Self { ptr })
            .ok_or(DecodeError::Undecodable)
    }

    pub(crate) fn as_ptr(&self) -> *const wchar_t {
        self.ptr.as_ptr()
    }
}

impl Drop for ProgramName {
    fn drop(&mut self) {
        // Allocated by Py_DecodeLocale, so released through the raw allocator.
        unsafe { ffi::PyMem_RawFree(self.ptr.as_ptr().cast()) };
    }
}
