//! Colour palette and emoji glyphs for each file category.
//!
//! The mapping is total over [`FileCategory`] and category-pure: the hidden
//! override is applied by the render call sites, never here.

use colored::{Color, ColoredString, Colorize};

use crate::core::classify::FileCategory;

/// A terminal text style: optional foreground colour plus bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn paint(&self, text: &str) -> ColoredString {
        let styled = match self.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled.bold()
        } else {
            styled
        }
    }
}

/// Style for hidden (dot-prefixed) entries, applied by callers on top of
/// whatever the category mapping says.  Bold black renders as the dark gray
/// the tool has always used.
pub const HIDDEN_STYLE: Style = Style {
    color: Some(Color::Black),
    bold: true,
};

/// Colour for a category.  Directories always get the fixed directory style
/// regardless of category.
pub fn color_for(category: FileCategory, is_dir: bool) -> Style {
    if is_dir {
        return Style {
            color: Some(Color::Blue),
            bold: true,
        };
    }
    let (color, bold) = match category {
        FileCategory::Programming => (Some(Color::Cyan), false),
        FileCategory::Text => (Some(Color::Green), false),
        FileCategory::Video => (Some(Color::Magenta), false),
        FileCategory::Picture => (Some(Color::Yellow), false),
        FileCategory::Compressed => (Some(Color::Red), true),
        FileCategory::Hidden => (Some(Color::Black), true),
        FileCategory::Executable => (Some(Color::Cyan), true),
        FileCategory::Other => (None, false),
    };
    Style { color, bold }
}

/// Emoji glyph for a category.  Directories always get the folder glyph.
pub fn glyph_for(category: FileCategory, is_dir: bool) -> &'static str {
    if is_dir {
        return "📂";
    }
    match category {
        FileCategory::Programming => "💻",
        FileCategory::Text => "📜",
        FileCategory::Video => "🎬",
        FileCategory::Picture => "🖼️",
        FileCategory::Executable => "⚙️",
        FileCategory::Compressed => "🎁",
        FileCategory::Hidden | FileCategory::Other => "📄",
    }
}
