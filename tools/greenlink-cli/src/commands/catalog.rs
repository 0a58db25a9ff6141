//! Catalog listing.

use anyhow::Result;
use greenlink_commerce::catalog::CategoryFilter;
use serde::Serialize;

use super::ProductsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ProductView<'a> {
    id: &'a str,
    name: &'a str,
    price: String,
    category: &'a str,
    description: &'a str,
    /// Reveal delay in the page's staggered fade-in.
    reveal_after_ms: u128,
}

/// `greenlink products`
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter: CategoryFilter = args.category.as_deref().unwrap_or_default().parse()?;

    let shown: Vec<ProductView<'_>> = catalog
        .filter(&filter, ctx.config.view.reveal_stagger())
        .into_iter()
        .filter(|visibility| visibility.shown)
        .map(|visibility| ProductView {
            id: visibility.product.id.as_str(),
            name: &visibility.product.name,
            price: visibility.product.price.display(),
            category: visibility.product.category.as_str(),
            description: &visibility.product.description,
            reveal_after_ms: visibility.reveal_after.unwrap_or_default().as_millis(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    ctx.output.header("Products");
    if shown.is_empty() {
        let known: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();
        ctx.output.warn(&format!(
            "No products in that category (known: {})",
            known.join(", ")
        ));
        return Ok(());
    }

    let widths = [16, 28, 12, 14];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY"], &widths);
    for product in &shown {
        ctx.output.table_row(
            &[product.id, product.name, &product.price, product.category],
            &widths,
        );
    }
    Ok(())
}
