//! Filesystem capability consumed by the loader.
//!
//! The loader never touches `std::fs` directly; it walks whatever implements
//! [`FileSystem`]. [`OsFileSystem`] is the real backend, [`MemoryFileSystem`]
//! is an in-memory fake for deterministic tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Classification of a directory entry as the capability reported it.
///
/// Symlinks are not resolved; they land on whatever kind the backend's
/// metadata call returns for the link itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single directory entry: name plus kind.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Read access to a directory tree.
///
/// Entries are yielded in the order the capability reports them; the loader
/// discovers controllers in exactly that order.
pub trait FileSystem: Send + Sync {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

/// `std::fs`-backed capability.
///
/// Entries are sorted by name so reports stay reproducible across platforms
/// and filesystems that return readdir results in arbitrary order.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// In-memory directory tree for tests.
///
/// `read_dir` yields entries in insertion order, which makes traversal-order
/// behavior observable without depending on a real filesystem.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, creating every missing ancestor directory.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        self.ensure_dir(parent);
        let name = name.to_string_lossy().into_owned();
        let entries = self.dirs.entry(parent.to_path_buf()).or_default();
        if !entries.iter().any(|e| e.name == name) {
            entries.push(DirEntry::file(name));
        }
    }

    /// Register an (initially empty) directory, creating missing ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.ensure_dir(path.as_ref());
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.dirs.insert(path.to_path_buf(), Vec::new());
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if !parent.as_os_str().is_empty() {
                self.ensure_dir(parent);
                let name = name.to_string_lossy().into_owned();
                let entries = self.dirs.entry(parent.to_path_buf()).or_default();
                if !entries.iter().any(|e| e.name == name) {
                    entries.push(DirEntry::directory(name));
                }
            }
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.dirs.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_builds_ancestors() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("root/api/auth/a.ctrl");

        let entries = fs.read_dir(Path::new("root")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "api");
        assert_eq!(entries[0].kind, EntryKind::Directory);

        let entries = fs.read_dir(Path::new("root/api/auth")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.ctrl");
        assert_eq!(entries[0].kind, EntryKind::File);
    }

    #[test]
    fn test_memory_fs_preserves_insertion_order() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("root/z.ctrl");
        fs.add_file("root/a.ctrl");
        let names: Vec<_> = fs
            .read_dir(Path::new("root"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["z.ctrl", "a.ctrl"]);
    }

    #[test]
    fn test_memory_fs_missing_dir_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_dir(Path::new("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_os_fs_sorts_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.ctrl"), b"").unwrap();
        std::fs::write(dir.path().join("a.ctrl"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let names: Vec<_> = OsFileSystem
            .read_dir(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["a.ctrl", "b.ctrl", "sub"]);
    }
}
