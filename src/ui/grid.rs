//! Multi-column rendering — pack entries into fixed-width cells across the
//! terminal, row-major.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::core::list::ListedEntry;

/// Display columns per cell, excluding the glyph and its trailing space.
const COLUMN_WIDTH: usize = 17;
/// Names longer than this are truncated with a continuation marker.
const MAX_NAME_LEN: usize = 15;

/// Number of cells per row for a given terminal width, never below one.
pub fn column_count(term_width: u16) -> usize {
    ((term_width as usize) / (COLUMN_WIDTH + 1)).max(1)
}

/// Lay out `items` row-major into rendered lines.  The final row is simply
/// shorter — no cell is drawn past the last entry.
pub fn render_grid(items: &[ListedEntry], term_width: u16) -> Vec<String> {
    let columns = column_count(term_width);
    let rows = items.len().div_ceil(columns.max(1));

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..columns {
            let Some(item) = items.get(row * columns + col) else {
                break;
            };
            line.push_str(&render_cell(item));
        }
        lines.push(line);
    }
    lines
}

/// One cell: glyph, space, styled name padded to [`MAX_NAME_LEN`] columns.
fn render_cell(item: &ListedEntry) -> String {
    let entry = &item.entry;
    let style = if entry.hidden {
        theme::HIDDEN_STYLE
    } else {
        theme::color_for(item.category, entry.is_dir)
    };
    let glyph = theme::glyph_for(item.category, entry.is_dir);

    let name_len = entry.name.chars().count();
    let body = if name_len > MAX_NAME_LEN {
        let stem: String = entry.name.chars().take(MAX_NAME_LEN - 1).collect();
        let used = UnicodeWidthStr::width(stem.as_str()) + 1;
        let pad = " ".repeat(MAX_NAME_LEN.saturating_sub(used));
        format!("{}{}{pad}", style.paint(&stem), ">".bright_yellow())
    } else {
        let used = UnicodeWidthStr::width(entry.name.as_str());
        let pad = " ".repeat(MAX_NAME_LEN.saturating_sub(used));
        format!("{}{pad}", style.paint(&entry.name))
    };

    format!("{glyph} {body}")
}
