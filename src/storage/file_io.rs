//! Reading and replacing the ledger's JSON data files
//!
//! A data file is only ever replaced whole: the new document is written to
//! `<name>.tmp` beside it, synced, then renamed over the old one.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Load a data file; a file that does not exist yet loads as `T::default()`
pub fn read_json<T>(path: &Path) -> LedgerResult<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        LedgerError::Storage(format!(
            "{} is not valid ledger data (line {}, column {}): {}",
            path.display(),
            e.line(),
            e.column(),
            e
        ))
    })
}

/// Replace a data file with `data`, pretty-printed
pub fn write_json_atomic<T>(path: &Path, data: &T) -> LedgerResult<()>
where
    T: Serialize,
{
    let mut document = serde_json::to_vec_pretty(data)
        .map_err(|e| LedgerError::Storage(format!("Cannot encode {}: {}", path.display(), e)))?;
    document.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory for", path, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&document)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|_| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("replace", path, e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn storage_error(action: &str, path: &Path, e: io::Error) -> LedgerError {
    LedgerError::Storage(format!("Cannot {} {}: {}", action, path.display(), e))
}
