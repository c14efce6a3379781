use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Render `matrix` as aligned columns, one row per line.
pub fn generate<W: Write>(title: Option<&str>, matrix: &[Vec<String>], use_colors: bool, writer: &mut W) -> Result<()> {
    if let Some(title) = title {
        if use_colors {
            writeln!(writer, "{}", title.bold().underline())?;
        } else {
            writeln!(writer, "{title}")?;
        }
    }

    if matrix.is_empty() {
        return Ok(());
    }

    // Column widths over the whole matrix.
    let mut widths = vec![0_usize; matrix[0].len()];
    for row in matrix {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    for (index, row) in matrix.iter().enumerate() {
        let mut line = String::new();
        for (cell, width) in row.iter().zip(widths.iter().copied()) {
            if !line.is_empty() {
                line.push_str("  ");
            }
            write!(line, "{cell:<width$}")?;
        }

        let line = line.trim_end();
        if index == 0 && use_colors {
            writeln!(writer, "{}", line.bold())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}
