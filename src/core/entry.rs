//! Transient view of a single filesystem entry.
//!
//! Entries are read fresh from the filesystem on every listing pass — nothing
//! here outlives one directory level.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Lightweight metadata captured per filesystem entry.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
    /// Unix permission bits (`st_mode`). `None` when unavailable.
    pub mode: Option<u32>,
    /// File extension (lower-cased), e.g. `"rs"`, `"toml"`. `None` for dirs
    /// or extensionless files.
    pub extension: Option<String>,
    /// Name begins with a dot.
    pub hidden: bool,
    /// Recursive total size, filled by the lister only when `--total` applies.
    pub dir_total: Option<u64>,
}

impl EntryInfo {
    /// Read metadata for `path`, following symlinks.  Broken links fall back
    /// to the link's own metadata so they still show up in listings.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(_) => std::fs::symlink_metadata(path)?,
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
            size: meta.len(),
            modified: meta.modified().ok(),
            mode: mode_bits(&meta),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase()),
            hidden: name.starts_with('.'),
            name,
            path: path.to_path_buf(),
            dir_total: None,
        })
    }

    /// Owner-execute bit is set.  `false` when the mode is unknown.
    pub fn owner_exec(&self) -> bool {
        self.mode.is_some_and(|m| m & 0o100 != 0)
    }

    /// POSIX-style permission string: type char plus `rwx` for user, group,
    /// other (e.g. `"drwxr-xr-x"`).  Nine `?` when the mode is unavailable.
    pub fn permissions(&self) -> String {
        let Some(mode) = self.mode else {
            return "?????????".to_string();
        };
        let mut s = String::with_capacity(10);
        s.push(if self.is_dir { 'd' } else { '-' });
        for shift in [6u32, 3, 0] {
            let bits = (mode >> shift) & 0o7;
            s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        s
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_bits(_meta: &Metadata) -> Option<u32> {
    None
}
