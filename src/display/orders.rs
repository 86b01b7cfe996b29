use std::io;

use smallvec::{SmallVec, smallvec};
use tabled::{builder::Builder, settings::Color};

use crate::orders::{Order, OrderHistory, OrderStatus};

use super::{DisplayError, styled_table, write_table};

/// Write every order in the history.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_orders(mut out: impl io::Write, history: &OrderHistory<'_>) -> Result<(), DisplayError> {
    writeln!(out, "\n\x1b[1mYour Orders\x1b[0m")?;

    if history.is_empty() {
        writeln!(out, "No orders yet. When you place your first order, it will appear here.")?;
        return Ok(());
    }

    for order in history.orders() {
        write_order(&mut out, order)?;
    }

    Ok(())
}

fn write_order(out: &mut impl io::Write, order: &Order<'_>) -> Result<(), DisplayError> {
    writeln!(
        out,
        "\nOrder # {}  placed {}  total {}  {}",
        order.id,
        order.placed_on_display(),
        order.total,
        status_color(&order.status).colorize(order.status.as_str()),
    )?;

    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Qty", "Price"]);

    for line in &order.lines {
        builder.push_record([
            line.product_id.to_string(),
            line.title.clone(),
            line.quantity.to_string(),
            line.price.to_string(),
        ]);
    }

    write_table(out, &styled_table(builder, &[0, 2, 3], &[]))?;

    let mut actions: SmallVec<[&str; 4]> = smallvec!["Track Package", "View Invoice"];

    if order.can_review() {
        actions.push("Write Review");
    }

    if order.can_return() {
        actions.push("Return Items");
    }

    writeln!(out, "{}", actions.join(" · "))?;

    Ok(())
}

fn status_color(status: &OrderStatus) -> Color {
    match status {
        OrderStatus::Delivered => Color::FG_GREEN,
        OrderStatus::InTransit => Color::FG_BLUE,
        OrderStatus::Processing => Color::FG_YELLOW,
        OrderStatus::Cancelled => Color::FG_RED,
        OrderStatus::Other(_) => Color::FG_WHITE,
    }
}
