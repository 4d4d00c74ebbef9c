// src/io.rs
//
// File collaborators around the converter. Failures are reported to the caller,
// never turned into empty input or skipped output.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a markdown source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, IoError> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write rendered HTML, creating parent directories as needed.
pub fn write_output(path: &Path, html: &str) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, html).map_err(write_err)?;
    log::debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Default destination: the source path with an `html` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}
