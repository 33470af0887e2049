//! Atomic JSON read/write primitives: every write goes to a
//! temp sibling file, is fsync'd, then renamed over the target. Reads
//! tolerate a missing file by returning the caller-supplied default.

use crate::error::CacheError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, CacheError> {
    match std::fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| CacheError::Corrupt {
            path: path.display().to_string(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(source) => Err(CacheError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), CacheError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|source| CacheError::Write {
        path: path.display().to_string(),
        source,
    })?;

    let tmp_path = dir.join(format!(
        ".{}.tmp",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("cache")
    ));

    let bytes = serde_json::to_vec_pretty(value).map_err(|source| CacheError::Corrupt {
        path: path.display().to_string(),
        source,
    })?;

    {
        let mut file = File::create(&tmp_path).map_err(|source| CacheError::Write {
            path: tmp_path.display().to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| CacheError::Write {
            path: tmp_path.display().to_string(),
            source,
        })?;
        file.sync_all().map_err(|source| CacheError::Write {
            path: tmp_path.display().to_string(),
            source,
        })?;
    }

    std::fs::rename(&tmp_path, path).map_err(|source| CacheError::Write {
        path: path.display().to_string(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Sample {
        n: u32,
    }

    #[test]
    fn round_trips_through_atomic_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        write_json_atomic(&path, &Sample { n: 7 }).unwrap();
        let read: Sample = read_json(&path).unwrap();
        assert_eq!(read, Sample { n: 7 });
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let read: Sample = read_json(&path).unwrap();
        assert_eq!(read, Sample::default());
    }
}
