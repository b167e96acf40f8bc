//! Output formatting helpers.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use mimix_core::table::{PageStrip, Row};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Draw a table: header row, then one line per row view.
///
/// Rows under edit are marked with `*` and show their editable field
/// values; notice rows (empty collection, fetch error) span the table.
pub fn table(headers: &[&str], rows: &[Row]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        let cells = match row {
            Row::Display { cells, .. } => cells,
            Row::Edit { fields, .. } => fields,
            Row::Notice(_) => continue,
        };
        for (i, cell) in cells.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", header_line.bold());

    for (n, row) in rows.iter().enumerate() {
        match row {
            Row::Display { cells, .. } => {
                println!("{} {}", n + 1, pad_cells(cells, &widths));
            }
            Row::Edit { fields, .. } => {
                let line = pad_cells(fields, &widths);
                println!("{} {}", format!("{}*", n + 1).yellow(), line.yellow());
            }
            Row::Notice(msg) => {
                println!("  {}", msg.dimmed());
            }
        }
    }
}

fn pad_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let width = widths.get(i).copied().unwrap_or(0);
            format!("{:<width$}", c, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Draw the pagination strip, e.g. `< [1] 2 3 >`.
pub fn page_strip(strip: Option<&PageStrip>) {
    let Some(strip) = strip else { return };

    let mut parts = Vec::new();
    parts.push(if strip.prev_enabled {
        "<".normal()
    } else {
        "<".dimmed()
    });
    for button in &strip.pages {
        if button.active {
            parts.push(format!("[{}]", button.number).bold());
        } else {
            parts.push(button.number.to_string().normal());
        }
    }
    parts.push(if strip.next_enabled {
        ">".normal()
    } else {
        ">".dimmed()
    });

    let line = parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", line);
}

/// Ask for confirmation on stderr. `force` skips the prompt.
pub fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Read a line with a default shown in brackets; empty input keeps it.
pub fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    eprint!("{} [{}]: ", label.dimmed(), default);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
