use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use log::debug;

#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be opened
    Missing { path: PathBuf },
    /// The input file exists but holds zero bytes
    Empty { path: PathBuf },
    /// Any other failure while reading
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Missing { path } => write!(f, "failed to open '{}'", path.display()),
            LoadError::Empty { path } => write!(f, "the file '{}' was empty", path.display()),
            LoadError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read a whole program as raw bytes. Empty files are rejected here so the
/// translator only ever sees non-empty input.
pub fn load_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => LoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if bytes.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} bytes from '{}'", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_bytes_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'+', 0xff, b'.']).unwrap();

        let bytes = load_source(file.path()).unwrap();
        assert_eq!(bytes, vec![b'+', 0xff, b'.']);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bf");

        let err = load_source(&path).unwrap_err();
        assert!(matches!(err, LoadError::Missing { .. }));
        assert!(err.to_string().starts_with("failed to open"));
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = load_source(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
        assert!(err.to_string().ends_with("was empty"));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(dir.path()).unwrap_err();
        assert!(!matches!(err, LoadError::Empty { .. }));
    }
}
