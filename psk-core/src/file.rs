use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Render the file content
    fn render(&self) -> String;

    /// Create the file at `path`, leaving any existing file untouched.
    ///
    /// The content lands in a temporary sibling first and is moved into
    /// place without replacing anything, so the file is either absent or
    /// complete, and only one writer ever wins.
    fn write_new(&self, path: &Path) -> Result<WriteResult> {
        create_new(path, &self.render())
    }

    /// Write the file only if nothing exists at `path` yet
    fn write_if_missing(&self, path: &Path) -> Result<WriteResult> {
        match probe(path)? {
            FileState::Present => Ok(WriteResult::Skipped),
            FileState::Absent => self.write_new(path),
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// What currently sits at an output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Absent,
    Present,
}

/// Check the output path without reading the file.
///
/// Anything other than a regular file (a directory, a socket, a dangling
/// symlink) is an error, since it can never be replaced by the header.
pub fn probe(path: &Path) -> Result<FileState> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(FileState::Present),
        Ok(_) => Err(not_a_file(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
            // The entry exists but its target does not
            Ok(_) => Err(not_a_file(path)),
            Err(_) => Ok(FileState::Absent),
        },
        Err(e) => Err(Error::io(path, e)),
    }
}

fn not_a_file(path: &Path) -> Box<Error> {
    Box::new(Error::NotAFile {
        path: path.to_path_buf(),
    })
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn create_new(path: &Path, content: &str) -> Result<WriteResult> {
    let dir = parent_dir(path);
    if !dir.is_dir() {
        return Err(Box::new(Error::MissingParent {
            dir: dir.to_path_buf(),
        }));
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| Error::io(tmp.path(), e))?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(WriteResult::Written),
        // Someone else created it between the probe and now; their copy stays.
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => match probe(path)? {
            FileState::Present => Ok(WriteResult::Skipped),
            FileState::Absent => Err(Error::io(path, e.error)),
        },
        Err(e) => Err(Error::io(path, e.error)),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Fixed(&'static str);

    impl GeneratedFile for Fixed {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    fn leftover_entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_write_new_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.hpp");

        let result = Fixed("hello").write_new(&path).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(leftover_entries(temp.path()), 1);
    }

    #[test]
    fn test_write_new_never_clobbers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.hpp");
        fs::write(&path, "original").unwrap();

        let result = Fixed("replacement").write_new(&path).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        // The temporary file is cleaned up after losing
        assert_eq!(leftover_entries(temp.path()), 1);
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.hpp");
        fs::write(&path, "original").unwrap();

        let result = Fixed("should not write").write_if_missing(&path).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.hpp");

        let result = Fixed("new content").write_if_missing(&path).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_missing_parent_is_not_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.hpp");

        let err = Fixed("nested").write_if_missing(&path).unwrap_err();

        assert!(matches!(*err, Error::MissingParent { .. }));
        assert!(!temp.path().join("a").exists());
    }

    #[test]
    fn test_directory_in_the_way() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("psk.hpp");
        fs::create_dir(&path).unwrap();

        let err = probe(&path).unwrap_err();
        assert!(matches!(*err, Error::NotAFile { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("psk.hpp");
        std::os::unix::fs::symlink(temp.path().join("missing.hpp"), &path).unwrap();

        let err = Fixed("content").write_if_missing(&path).unwrap_err();
        assert!(matches!(*err, Error::NotAFile { .. }));

        // Even without the probe, losing to a dangling link is not a skip
        let err = Fixed("content").write_new(&path).unwrap_err();
        assert!(matches!(*err, Error::NotAFile { .. }));
        assert!(!temp.path().join("missing.hpp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_is_io_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("generated");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users ignore directory permissions
        let writable = fs::write(dir.join("check"), "").is_ok();
        let result = Fixed("content").write_if_missing(&dir.join("psk.hpp"));
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        if writable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
        assert!(!dir.join("psk.hpp").exists());
    }

    #[test]
    fn test_probe() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.hpp");

        assert_eq!(probe(&path).unwrap(), FileState::Absent);
        fs::write(&path, "content").unwrap();
        assert_eq!(probe(&path).unwrap(), FileState::Present);
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("psk.hpp")), Path::new("."));
        assert_eq!(
            parent_dir(Path::new("include/generated/psk.hpp")),
            Path::new("include/generated")
        );
    }
}
