//! Terminal rendering for catalog listings, product details, the cart and
//! order history.

use std::{fmt::Write as _, io};

use tabled::{
    Table,
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

mod cart;
mod catalog;
mod orders;

pub use cart::write_cart;
pub use catalog::{write_catalog, write_categories, write_not_found, write_product_detail};
pub use orders::write_orders;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Build a table with the shared house style.
///
/// `right_aligned` columns hold money and numbers; `separators` are row
/// indexes (after the header) that get a rule above them.
fn styled_table(builder: Builder, right_aligned: &[usize], separators: &[usize]) -> Table {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in separators {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    for &column in right_aligned {
        table.modify(Columns::new(column..=column), Alignment::right());
    }

    table
}

/// Write a table followed by a blank line.
fn write_table(out: &mut impl io::Write, table: &Table) -> Result<(), DisplayError> {
    writeln!(out, "{}", colorize_borders(&table.to_string()))?;

    Ok(())
}

/// Wraps runs of UTF-8 box-drawing characters in ANSI dark-grey escape codes.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

/// Write `label` and `value` on one line, padded to the given widths.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_width: usize,
    value_width: usize,
) -> Result<(), DisplayError> {
    writeln!(out, "{label:<label_width$} {value:>value_width$}")?;

    Ok(())
}

/// Filled and empty stars for a rating.
fn stars(full: u8) -> String {
    let full = usize::from(full.min(5));

    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_borders_wraps_box_runs() {
        let coloured = colorize_borders("╭─╮\n│a│");

        assert_eq!(
            coloured,
            "\x1b[90m╭─╮\x1b[0m\n\x1b[90m│\x1b[0ma\x1b[90m│\x1b[0m"
        );
    }

    #[test]
    fn stars_fill_from_the_left() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
