//! File categorization — map an entry to a semantic category by extension.
//!
//! The extension sets are plain data built once at startup and passed by
//! reference, so tests can substitute their own tables.

use std::collections::HashSet;

use super::entry::EntryInfo;

/// Semantic file-type tag.  Declaration order doubles as the sort ordinal:
/// files are grouped by category in this order before the name tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    Programming,
    Text,
    Video,
    Picture,
    /// Reserved — hidden status is a separate boolean flag applied at render
    /// time; the classifier never returns this.
    Hidden,
    Executable,
    Compressed,
    Other,
}

const PROGRAMMING_EXTENSIONS: &[&str] = &[
    "cpp", "h", "py", "java", "cs", "js", "php", "hs", "rs", "clj", "sh",
    "pl", "lua", "erl", "ex", "exs", "scala", "d", "go", "nim", "lisp", "cl",
    "f90", "f95", "vhdl", "verilog", "coffee", "racket", "dart", "tcl", "hlsl",
];

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "rtf", "log", "ini", "conf", "config", "nfo", "readme",
    "html", "htm", "bak", "asc", "diff", "lst", "srt", "mdown", "text",
    "out", "memo", "patch", "logfile", "po", "dat", "env", "sh", "doc",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "mpeg", "mpg", "m4v",
    "3gp", "ogv", "vob", "ts", "m2ts", "divx", "rm", "rmvb", "asf", "swf",
    "mxf", "hevc", "avchd", "mts", "ogm", "amv", "drc", "yuv", "h264", "h265",
];

const PICTURE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg", "ico",
    "raw", "xpm", "ppm", "pgm", "pbm", "heic", "heif",
];

const COMPRESSED_EXTENSIONS: &[&str] = &[
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "zst", "lz4", "tgz",
    "tbz2", "txz", "tzst", "tlz4", "jar", "war", "ear", "cab", "deb", "rpm",
    "apk", "dmg", "iso", "img", "appimage",
];

/// The five extension sets, checked in priority order.  An extension present
/// in more than one set (e.g. `sh`) resolves to the earlier category.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    programming: HashSet<&'static str>,
    text: HashSet<&'static str>,
    video: HashSet<&'static str>,
    picture: HashSet<&'static str>,
    compressed: HashSet<&'static str>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            programming: PROGRAMMING_EXTENSIONS.iter().copied().collect(),
            text: TEXT_EXTENSIONS.iter().copied().collect(),
            video: VIDEO_EXTENSIONS.iter().copied().collect(),
            picture: PICTURE_EXTENSIONS.iter().copied().collect(),
            compressed: COMPRESSED_EXTENSIONS.iter().copied().collect(),
        }
    }
}

impl CategoryTable {
    /// Categorize an entry.  Only regular files match the extension sets;
    /// an unmatched regular file with the owner-execute bit is `Executable`,
    /// everything else is `Other`.
    pub fn classify(&self, entry: &EntryInfo) -> FileCategory {
        if entry.is_file {
            if let Some(ext) = entry.extension.as_deref() {
                let sets = [
                    (&self.programming, FileCategory::Programming),
                    (&self.text, FileCategory::Text),
                    (&self.video, FileCategory::Video),
                    (&self.picture, FileCategory::Picture),
                    (&self.compressed, FileCategory::Compressed),
                ];
                for (set, category) in sets {
                    if set.contains(ext) {
                        return category;
                    }
                }
            }
            if entry.owner_exec() {
                return FileCategory::Executable;
            }
        }
        FileCategory::Other
    }
}
