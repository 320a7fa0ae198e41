use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The input text could not be obtained.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open data file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading data file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a whole text file into memory
///
/// Invalid UTF-8 sequences are replaced with U+FFFD so the rest of the file stays
/// scannable.
///
/// # Arguments
/// * `filename` - Path to the data file
///
/// # Returns
/// The file contents, or `SourceError` if the file cannot be opened or read
pub fn read_text_file<P: AsRef<Path>>(filename: P) -> Result<String, SourceError> {
    let path = filename.as_ref();
    let mut file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
