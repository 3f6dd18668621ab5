//! Decoder script location policy
//!
//! Short ordered list of candidate locations, first existing match wins.
//! A working-tree copy takes precedence over the system install.

use std::path::{Path, PathBuf};

/// Candidate locations for the decoder entry script, highest priority first.
const CANDIDATES: [&str; 2] = [
    "spacelab-decoder/main.py",
    "/usr/share/spacelab-decoder/main.py",
];

/// Resolve the decoder entry script, or `None` when no candidate exists.
///
/// Selection is final: the launcher does not re-check after choosing, and a
/// file that vanishes afterwards is tolerated downstream as a silent skip.
pub fn main_script() -> Option<PathBuf> {
    first_existing(CANDIDATES.iter().map(Path::new))
}

fn first_existing<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_earlier_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("main.py");
        let system = dir.path().join("system.py");
        fs::write(&local, "").unwrap();
        fs::write(&system, "").unwrap();

        let chosen = first_existing([local.as_path(), system.as_path()]);
        assert_eq!(chosen, Some(local));
    }

    #[test]
    fn test_falls_back_to_later_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("main.py");
        let system = dir.path().join("system.py");
        fs::write(&system, "").unwrap();

        let chosen = first_existing([local.as_path(), system.as_path()]);
        assert_eq!(chosen, Some(system));
    }

    #[test]
    fn test_none_when_no_candidate_exists() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("main.py");
        let system = dir.path().join("system.py");

        assert_eq!(first_existing([local.as_path(), system.as_path()]), None);
    }
}
