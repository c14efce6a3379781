//! Report rendering for generated table matrices.
//!
//! Three renderers share the same input: a rectangular matrix of strings, header row
//! first, plus an optional title. All of them build their output through
//! `core::fmt::Write` so callers decide where the text ends up.
//!
//! - **Console**: aligned columns for the terminal, optionally colored.
//! - **CSV**: spreadsheet-compatible output with RFC-style escaping.
//! - **HTML**: a small self-contained document with a generation timestamp.

mod console;
mod csv;
mod html;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use html::generate as generate_html;
