//! Log-file resolution with rotated-file fallback.
//!
//! Rotation renames the active file to `<base>.<suffix>` and starts a
//! fresh one, so the path handed to the verifier often no longer exists
//! by the time it runs. When the literal path is absent, the newest
//! file sharing that name as a dotted prefix is scanned instead. The
//! suffix is opaque; candidates are ranked by creation time only.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// How a requested path was turned into a scannable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The literal path exists as a regular file.
    Exact(PathBuf),
    /// The literal path was absent; a rotated candidate was selected.
    Rotated {
        /// Candidate with the latest creation time.
        path: PathBuf,
        /// Number of rotated candidates considered.
        candidates: usize,
    },
}

impl Resolution {
    /// The file path to scan.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Exact(path) | Self::Rotated { path, .. } => path,
        }
    }
}

/// Resolution error.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Neither the literal path nor any rotated candidate exists.
    #[error("could not find log file {}", path.display())]
    NotFound {
        /// The path as requested.
        path: PathBuf,
    },

    /// Directory enumeration failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Resolve `path` to a scannable log file.
///
/// The literal path wins when it exists as a regular file. Otherwise
/// every regular file in the containing directory named
/// `<name>.<suffix>` (non-empty suffix) is a candidate and the one
/// with the latest creation time is chosen. Creation time falls back
/// to modification time on filesystems that do not record it.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when nothing matches, and
/// [`ResolveError::Io`] when the containing directory cannot be read.
pub fn resolve_log_path(path: &Path) -> Result<Resolution, ResolveError> {
    if path.is_file() {
        return Ok(Resolution::Exact(path.to_path_buf()));
    }

    let not_found = || ResolveError::NotFound {
        path: path.to_path_buf(),
    };

    let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Err(not_found());
    };
    let prefix = format!("{name}.");
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(not_found()),
        Err(err) => return Err(ResolveError::Io(err)),
    };

    let mut best: Option<(SystemTime, String)> = None;
    let mut candidates = 0;
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        // suffix must be non-empty: "app.log." alone is not a rotation
        if file_name.len() <= prefix.len() || !file_name.starts_with(&prefix) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        candidates += 1;
        let created = metadata.created().or_else(|_| metadata.modified())?;
        if best.as_ref().is_none_or(|(when, _)| created > *when) {
            best = Some((created, file_name.to_string()));
        }
    }

    best.map_or_else(
        || Err(not_found()),
        |(_, winner)| {
            // keep the shape of the requested path: "logs/app.log" ->
            // "logs/app.log.<suffix>", never "./..."
            let chosen = path.with_file_name(winner);
            tracing::debug!(
                path = %chosen.display(),
                candidates,
                "selected rotated log file"
            );
            Ok(Resolution::Rotated {
                path: chosen,
                candidates,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "x\n").expect("write file");
        path
    }

    #[test]
    fn literal_path_wins() {
        let tmp = TempDir::new().expect("tmp");
        let base = touch(tmp.path(), "app.log");
        touch(tmp.path(), "app.log.20250128_090308");

        let resolution = resolve_log_path(&base).expect("resolve");
        assert_eq!(resolution, Resolution::Exact(base));
    }

    #[test]
    fn falls_back_to_newest_rotation() {
        let tmp = TempDir::new().expect("tmp");
        touch(tmp.path(), "app.log.1700000000");
        thread::sleep(Duration::from_millis(25));
        let newest = touch(tmp.path(), "app.log.1700000500");

        let resolution = resolve_log_path(&tmp.path().join("app.log")).expect("resolve");
        match resolution {
            Resolution::Rotated { path, candidates } => {
                assert_eq!(path, newest);
                assert_eq!(candidates, 2);
            }
            Resolution::Exact(path) => panic!("unexpected exact match: {}", path.display()),
        }
    }

    #[test]
    fn dotless_neighbors_are_not_candidates() {
        let tmp = TempDir::new().expect("tmp");
        touch(tmp.path(), "app.logx");
        touch(tmp.path(), "app.log_old");

        let err = resolve_log_path(&tmp.path().join("app.log")).expect_err("no candidates");
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }

    #[test]
    fn empty_suffix_is_not_a_candidate() {
        let tmp = TempDir::new().expect("tmp");
        touch(tmp.path(), "app.log.");

        let err = resolve_log_path(&tmp.path().join("app.log")).expect_err("no candidates");
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }

    #[test]
    fn missing_everything_reports_the_requested_path() {
        let tmp = TempDir::new().expect("tmp");
        let requested = tmp.path().join("ghost.log");

        let err = resolve_log_path(&requested).expect_err("nothing to find");
        assert!(err.to_string().contains("ghost.log"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let requested = tmp.path().join("no_dir").join("app.log");

        let err = resolve_log_path(&requested).expect_err("no directory");
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }
}
