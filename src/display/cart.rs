use std::io;

use tabled::builder::Builder;

use crate::{cart::Cart, pricing::OrderSummary};

use super::{DisplayError, styled_table, write_summary_line, write_table};

/// Write the cart's line items followed by its order summary.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_cart(mut out: impl io::Write, cart: &Cart<'_>) -> Result<(), DisplayError> {
    writeln!(out, "\n\x1b[1mShopping Cart\x1b[0m")?;

    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    } else {
        let mut builder = Builder::default();

        builder.push_record(["#", "Product", "Category", "Each", "Qty", "Line Total"]);

        for line in cart.items() {
            let product = line.product();

            let title = if product.prime {
                format!("{}\nPrime FREE delivery", product.title)
            } else {
                product.title.clone()
            };

            builder.push_record([
                product.id.to_string(),
                title,
                product.category.clone(),
                product.price.to_string(),
                line.quantity().to_string(),
                line.line_total().to_string(),
            ]);
        }

        write_table(&mut out, &styled_table(builder, &[0, 3, 4, 5], &[]))?;
    }

    write_order_summary(&mut out, &cart.summary())
}

fn write_order_summary(
    out: &mut impl io::Write,
    summary: &OrderSummary<'_>,
) -> Result<(), DisplayError> {
    let subtotal_label = format!(" Subtotal ({} items):", summary.item_count());
    let shipping_label = " Shipping:";
    let tax_label = " Tax:";
    let total_label = " Total:";

    let subtotal_val = format!("{}  ", summary.subtotal());
    let shipping_val = if summary.has_free_shipping() {
        "FREE  ".to_string()
    } else {
        format!("{}  ", summary.shipping())
    };
    let tax_val = format!("{}  ", summary.tax());
    let total_val = format!("{}  ", summary.total());

    let label_width = [
        subtotal_label.len(),
        shipping_label.len(),
        tax_label.len(),
        total_label.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or_default();

    let value_width = [
        subtotal_val.len(),
        shipping_val.len(),
        tax_val.len(),
        total_val.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or_default();

    writeln!(out)?;
    write_summary_line(out, &subtotal_label, &subtotal_val, label_width, value_width)?;
    write_summary_line(out, shipping_label, &shipping_val, label_width, value_width)?;
    write_summary_line(out, tax_label, &tax_val, label_width, value_width)?;
    write_summary_line(out, total_label, &total_val, label_width, value_width)?;

    if let Some(shortfall) = summary.free_shipping_shortfall() {
        writeln!(out, "\n Add {shortfall} more to get FREE shipping!")?;
    }

    writeln!(out)?;

    Ok(())
}
