//! Merge rules.
//!
//! The line collapse is the only place tiles combine and score is earned.
//! Sessions call into it once per row or column; nothing here touches a
//! grid directly.

pub mod collapse;

pub use collapse::{collapse_line, collapse_line_reversed, Collapse};
