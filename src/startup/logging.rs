//! File-based tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::AppConfig;

/// Dependency targets that are too chatty below `warn`.
const QUIET_TARGETS: &[&str] = &["reqwest=warn", "hyper=warn", "rustls=warn"];

/// Build the filter from a directive string, falling back to `info` when the
/// string does not parse.
pub fn build_filter(spec: &str) -> EnvFilter {
    let mut filter = EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new("info"));
    for directive in QUIET_TARGETS {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Open (creating parent directories) a log file for appending.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// Returns the log path in use, or `None` when logging is disabled because no
/// path is configured or the file cannot be opened.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let path = config.log_file.clone()?;

    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: logging disabled, cannot open {}: {}",
                path.display(),
                e
            );
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => Some(path),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_valid_spec() {
        let filter = build_filter("postboard=debug");
        assert!(filter.to_string().contains("postboard=debug"));
        assert!(filter.to_string().contains("reqwest=warn"));
    }

    #[test]
    fn test_build_filter_keeps_quiet_targets_on_garbage() {
        let filter = build_filter("=garbage=");
        assert!(filter.to_string().contains("hyper=warn"));
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("postboard.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_disabled_without_path() {
        let config = AppConfig::default().with_log_file(None);
        assert_eq!(init_logging(&config), None);
    }
}
