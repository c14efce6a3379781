use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

/// Render `matrix` as CSV, one line per row.
pub fn generate<W: Write>(matrix: &[Vec<String>], writer: &mut W) -> Result<()> {
    for row in matrix {
        for (index, cell) in row.iter().enumerate() {
            if index > 0 {
                write!(writer, ",")?;
            }
            write!(writer, "{}", escape_csv(cell))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
