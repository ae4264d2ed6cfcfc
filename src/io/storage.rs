use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for backing-file I/O
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no to-do file at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Result of [`TodoFile::load_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub lines: Vec<String>,
    /// The file was missing and an empty one was created.
    pub created: bool,
}

/// The plain-text backing file: one task per line.
#[derive(Debug, Clone)]
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TodoFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored line, each keeping its terminator.
    pub fn load(&self) -> Result<Vec<String>, StorageError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StorageError::Read {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
        tracing::debug!(path = %self.path.display(), count = lines.len(), "loaded to-do file");
        Ok(lines)
    }

    /// Replace the whole file with `lines`, written back to back in order.
    pub fn write<S: AsRef<str>>(&self, lines: &[S]) -> Result<(), StorageError> {
        let content: String = lines.iter().map(|l| l.as_ref()).collect();
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), count = lines.len(), "wrote to-do file");
        Ok(())
    }

    /// Load the list, creating an empty file first if none exists.
    pub fn load_or_create(&self) -> Result<Loaded, StorageError> {
        match self.load() {
            Ok(lines) => Ok(Loaded {
                lines,
                created: false,
            }),
            Err(e) if e.is_not_found() => {
                tracing::warn!(path = %self.path.display(), "to-do file missing, creating an empty one");
                self.write::<&str>(&[])?;
                Ok(Loaded {
                    lines: Vec::new(),
                    created: true,
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Write `content` to `path` using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_keeps_terminators() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        fs::write(&path, "buy milk\ncall mom\n").unwrap();

        let file = TodoFile::new(&path);
        assert_eq!(file.load().unwrap(), lines(&["buy milk\n", "call mom\n"]));
    }

    #[test]
    fn test_load_last_line_without_terminator() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        fs::write(&path, "one\ntwo").unwrap();

        let file = TodoFile::new(&path);
        assert_eq!(file.load().unwrap(), lines(&["one\n", "two"]));
    }

    #[test]
    fn test_load_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        fs::write(&path, "").unwrap();

        assert!(TodoFile::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = TodoFile::new(tmp.path().join("missing.txt"));
        let err = file.load().unwrap_err();
        assert!(err.is_not_found());
        assert!(!file.path().exists());
    }

    #[test]
    fn test_write_overwrites_everything() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        fs::write(&path, "old one\nold two\nold three\n").unwrap();

        let file = TodoFile::new(&path);
        file.write(&["new\n"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");

        file.write::<&str>(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/todos.txt");
        TodoFile::new(&path).write(&["x\n"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_load_or_create_missing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        let file = TodoFile::new(&path);

        let loaded = file.load_or_create().unwrap();
        assert!(loaded.created);
        assert!(loaded.lines.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let again = file.load_or_create().unwrap();
        assert!(!again.created);
    }

    #[test]
    fn test_load_or_create_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        fs::write(&path, "a\n").unwrap();

        let loaded = TodoFile::new(&path).load_or_create().unwrap();
        assert_eq!(
            loaded,
            Loaded {
                lines: lines(&["a\n"]),
                created: false
            }
        );
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todos.txt");
        atomic_write(&path, b"hello\n").unwrap();

        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
