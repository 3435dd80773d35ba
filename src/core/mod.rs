//! Core algorithms — entry metadata, categorization, sizing, and listing.
//!
//! Nothing in this module knows about colors or glyphs beyond handing the
//! renderers the data they need.

pub mod classify;
pub mod entry;
pub mod list;
pub mod size;
