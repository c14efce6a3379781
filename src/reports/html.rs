use crate::Result;
use chrono::{DateTime, Local};
use core::fmt::Write;

/// Render `matrix` as a small self-contained HTML document.
pub fn generate<W: Write>(title: Option<&str>, matrix: &[Vec<String>], timestamp: DateTime<Local>, writer: &mut W) -> Result<()> {
    let title = title.unwrap_or("Contribution Statistics");

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "  <meta charset=\"UTF-8\">")?;
    writeln!(writer, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(writer, "  <title>{}</title>", escape_html(title))?;
    write_styles(writer)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "  <h1>{}</h1>", escape_html(title))?;
    writeln!(writer, "  <p class=\"timestamp\">Generated on {}</p>", timestamp.format("%Y-%m-%d %H:%M:%S"))?;

    if let Some((header, body)) = matrix.split_first() {
        writeln!(writer, "  <table>")?;
        writeln!(writer, "    <thead>")?;
        writeln!(writer, "      <tr>")?;
        for cell in header {
            writeln!(writer, "        <th>{}</th>", escape_html(cell))?;
        }
        writeln!(writer, "      </tr>")?;
        writeln!(writer, "    </thead>")?;
        writeln!(writer, "    <tbody>")?;
        for row in body {
            writeln!(writer, "      <tr>")?;
            for (index, cell) in row.iter().enumerate() {
                if index == 0 {
                    writeln!(writer, "        <th scope=\"row\">{}</th>", escape_html(cell))?;
                } else {
                    writeln!(writer, "        <td>{}</td>", escape_html(cell))?;
                }
            }
            writeln!(writer, "      </tr>")?;
        }
        writeln!(writer, "    </tbody>")?;
        writeln!(writer, "  </table>")?;
    }

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    Ok(())
}

fn write_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    body {{ font-family: sans-serif; margin: 2em; }}")?;
    writeln!(writer, "    .timestamp {{ color: #666; font-size: 0.9em; }}")?;
    writeln!(writer, "    table {{ border-collapse: collapse; }}")?;
    writeln!(writer, "    th, td {{ border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }}")?;
    writeln!(writer, "    thead th {{ background: #f0f0f0; }}")?;
    writeln!(writer, "    tbody tr:nth-child(even) {{ background: #fafafa; }}")?;
    writeln!(writer, "  </style>")?;
    Ok(())
}

/// Escape text for safe inclusion in HTML content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
