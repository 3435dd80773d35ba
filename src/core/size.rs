//! Human-readable size formatting and recursive directory totals.

use std::path::Path;

use walkdir::WalkDir;

/// Base units for successive 1024 divisions.  `YB` is unreachable through
/// this table (the index check hands off to the synthetic scheme one step
/// early) — a quirk kept for output compatibility.
const BASE_UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a short human-readable string.
///
/// Values under 1024 print as integers (`"512 B"`).  Larger values divide by
/// 1024 per unit step and keep four significant characters, *truncated* — not
/// rounded: `format_size(1331)` is `"1.299 KB"`.  Unit indices past the base
/// table synthesize a label by stepping the prefix letter past `Z`.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut reduced = bytes as f64;
    let mut unit_index: i32 = -1;
    while reduced >= 1024.0 {
        reduced /= 1024.0;
        unit_index += 1;
    }

    let unit = if unit_index < 7 {
        BASE_UNITS[unit_index as usize].to_string()
    } else {
        let prefix = (b'Z' + (unit_index - 6) as u8) as char;
        format!("{prefix}B")
    };

    let digits: String = format!("{reduced:.6}").chars().take(5).collect();
    format!("{digits} {unit}")
}

/// Recursively sum the sizes of all regular files under `dir`.
///
/// Symlinks are not followed and unreadable subtrees are skipped silently,
/// so a permission-denied directory contributes zero rather than an error.
pub fn dir_total_size(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}
