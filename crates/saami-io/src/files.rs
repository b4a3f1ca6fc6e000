use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use saami_core::codec;
use saami_types::Record;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn read(path: &Path, source: io::Error) -> Self {
        FileError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write(path: &Path, source: io::Error) -> Self {
        FileError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a markup source, replacing invalid UTF-8
pub fn read_source(path: &Path) -> Result<String, FileError> {
    let bytes = fs::read(path).map_err(|e| FileError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_wordlist(path: &Path) -> Result<Vec<Record>, FileError> {
    let file = File::open(path).map_err(|e| FileError::read(path, e))?;
    codec::read_records(BufReader::new(file)).map_err(|e| FileError::read(path, e))
}

pub fn write_wordlist(path: &Path, records: &[Record]) -> Result<(), FileError> {
    let file = File::create(path).map_err(|e| FileError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    codec::write_records(&mut writer, records).map_err(|e| FileError::write(path, e))?;
    tracing::info!("Wrote {} entries to {}", records.len(), path.display());
    Ok(())
}

/// Create the report file.
///
/// Any failure to create `requested` (bad path, permissions) silently falls
/// back to `fallback`; only a failure on `fallback` is an error.
pub fn open_report(requested: Option<&Path>, fallback: &Path) -> Result<(File, PathBuf), FileError> {
    if let Some(path) = requested {
        match File::create(path) {
            Ok(file) => return Ok((file, path.to_path_buf())),
            Err(e) => {
                tracing::debug!("Can't create {}, using {}: {e}", path.display(), fallback.display());
            }
        }
    }

    let file = File::create(fallback).map_err(|e| FileError::write(fallback, e))?;
    Ok((file, fallback.to_path_buf()))
}
