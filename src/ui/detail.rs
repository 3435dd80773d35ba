//! Detailed one-entry-per-line rendering: glyph, name, permissions, size,
//! timestamp.

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::core::list::ListedEntry;
use crate::core::size::format_size;

/// Fixed width the name column pads to.
const NAME_WIDTH: usize = 20;

/// Pad `text` with spaces up to `width` display columns.
pub(crate) fn pad_display(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = String::from(text);
    for _ in used..width {
        padded.push(' ');
    }
    padded
}

/// Render one entry as a detailed line.
///
/// Regular files get a size column and a `YYYY-MM-DD HH:MM:SS` mtime;
/// directories get their recursive total (annotated `(total)`) when
/// `show_total` is set and the lister filled one in.
pub fn render_detail(item: &ListedEntry, show_total: bool) -> String {
    let entry = &item.entry;
    let style = if entry.hidden {
        theme::HIDDEN_STYLE
    } else {
        theme::color_for(item.category, entry.is_dir)
    };
    let glyph = theme::glyph_for(item.category, entry.is_dir);
    let name = pad_display(&entry.name, NAME_WIDTH);

    let mut line = format!("{glyph} {} {}", style.paint(&name), entry.permissions());

    if entry.is_file {
        line.push_str(&format!(" {:<10}", format_size(entry.size)));
    }
    if entry.is_dir && show_total {
        if let Some(total) = entry.dir_total {
            line.push_str(&format!(" {:<10} (total)", format_size(total)));
        }
    }
    if !entry.is_dir {
        if let Some(mtime) = entry.modified {
            let stamp: DateTime<Local> = mtime.into();
            line.push_str(&format!(" {}", stamp.format("%Y-%m-%d %H:%M:%S")));
        }
    }

    line
}
