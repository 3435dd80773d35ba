//! Rendering layer — everything that turns entries into styled text.
//!
//! Renderers are pure string producers; the lister owns the actual stdout
//! writes so the pause pager can count lines.  No filesystem I/O happens
//! here.

pub mod about;
pub mod detail;
pub mod grid;
pub mod theme;
