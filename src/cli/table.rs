//! Plain-text table rendering for command output.

/// Render rows under a header line, columns padded to their widest cell.
/// Returns an empty string when there are no rows.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers.iter().map(|h| *h), &widths);
    for row in rows {
        render_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn render_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let cells: Vec<&str> = cells.collect();
    for (i, cell) in cells.iter().enumerate() {
        if i == cells.len() - 1 {
            // No trailing padding on the last column.
            out.push_str(cell);
        } else {
            out.push_str(&format!("{:width$}  ", cell, width = widths[i]));
        }
    }
    out.push('\n');
}
