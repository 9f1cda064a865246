//! Tracing setup.
//!
//! The interactive UI owns the terminal, so its events go to a file when
//! `--log` is given and are dropped otherwise. Headless commands log to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_filter(to_file: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if to_file { "info" } else { "warn" }))
}

pub fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<(), Box<dyn Error>> {
    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(default_filter(true))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if interactive => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(default_filter(false))
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|err| -> Box<dyn Error> { err })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn interactive_without_file_installs_nothing() {
        assert!(init_tracing(None, true).is_ok());
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing").join("marquee.log");
        assert!(init_tracing(Some(&path), true).is_err());
    }
}
