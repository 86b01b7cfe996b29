use std::io;

use smallvec::SmallVec;
use tabled::builder::Builder;

use crate::{
    products::{Product, ProductId},
    reviews::ReviewCounts,
};

use super::{DisplayError, stars, styled_table, write_table};

/// Write a product listing under `heading`.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_catalog(
    mut out: impl io::Write,
    heading: &str,
    products: &[&Product<'_>],
    reviews: &mut ReviewCounts,
) -> Result<(), DisplayError> {
    writeln!(out, "\n\x1b[1m{heading}\x1b[0m")?;

    if products.is_empty() {
        writeln!(out, "No products found. Try adjusting your search or filters.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Category", "Price", "Rating", "Reviews", ""]);

    for product in products {
        let review_count = reviews.count_for(product);

        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            price_cell(product),
            format!("{} {}", stars(product.full_stars()), product.rating),
            review_count.to_string(),
            badges(product),
        ]);
    }

    write_table(&mut out, &styled_table(builder, &[0, 3, 5], &[]))?;

    writeln!(out, "{} products", products.len())?;

    Ok(())
}

/// Write the detail view for one product.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_product_detail(
    mut out: impl io::Write,
    product: &Product<'_>,
    reviews: &mut ReviewCounts,
) -> Result<(), DisplayError> {
    writeln!(out, "\n\x1b[1m{}\x1b[0m", product.title)?;
    writeln!(
        out,
        "{} {} ({} reviews)",
        stars(product.full_stars()),
        product.rating,
        reviews.count_for(product)
    )?;
    writeln!(out)?;

    write!(out, "\x1b[1m{}\x1b[0m", product.price)?;

    if let Some(original_price) = product.original_price {
        write!(out, "  \x1b[9m{original_price}\x1b[0m")?;
    }

    if let Some(discount) = product.discount {
        write!(out, "  Save {discount}%")?;
    }

    writeln!(out)?;

    if let Some(savings) = product.savings() {
        writeln!(out, "You save {savings}")?;
    }

    if product.prime {
        writeln!(out, "Prime  FREE One-Day Delivery")?;
    }

    writeln!(out, "Category: {}", product.category)?;

    if !product.description.is_empty() {
        writeln!(out, "\n{}", product.description)?;
    }

    Ok(())
}

/// Write the fallback shown when a product id does not exist.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_not_found(mut out: impl io::Write, id: ProductId) -> Result<(), DisplayError> {
    writeln!(out, "\n\x1b[1mProduct not found\x1b[0m")?;
    writeln!(out, "No product with id {id} exists in the catalog.")?;

    Ok(())
}

/// Write the category navigation list.
///
/// # Errors
///
/// Returns [`DisplayError::Io`] if the output cannot be written.
pub fn write_categories(mut out: impl io::Write, categories: &[String]) -> Result<(), DisplayError> {
    for category in categories {
        writeln!(out, "{category}")?;
    }

    Ok(())
}

fn price_cell(product: &Product<'_>) -> String {
    match product.original_price {
        Some(original) if product.savings().is_some() => {
            format!("{}\n(was {original})", product.price)
        }
        _ => product.price.to_string(),
    }
}

fn badges(product: &Product<'_>) -> String {
    let mut badges = SmallVec::<[String; 2]>::new();

    if let Some(discount) = product.discount {
        badges.push(format!("-{discount}%"));
    }

    if product.prime {
        badges.push("Prime".to_string());
    }

    badges.join(" ")
}
