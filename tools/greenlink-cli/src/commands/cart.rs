//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use greenlink_cache::KvBackend;
use greenlink_commerce::cart::{
    CartEvent, CartStore, NewLineItem, QuantityChange, Receipt, Severity,
};
use greenlink_commerce::Money;
use greenlink_view::CartPanel;
use serde::Serialize;

use super::{AddArgs, BuyArgs, ConfirmArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;

/// Cart as printed by `show --json`.
#[derive(Serialize)]
struct CartView {
    slot: String,
    currency: &'static str,
    item_count: u64,
    total: String,
    lines: Vec<LineView>,
}

#[derive(Serialize)]
struct LineView {
    key: String,
    name: String,
    image: String,
    unit_price: String,
    quantity: u32,
    line_total: String,
}

impl CartView {
    fn new<B: KvBackend>(store: &CartStore<B>) -> Self {
        let panel = CartPanel::from_cart(store.cart());
        Self {
            slot: store.slot().to_string(),
            currency: store.currency().code(),
            item_count: store.item_count(),
            total: store.total().display(),
            lines: panel
                .rows
                .into_iter()
                .map(|row| LineView {
                    key: row.key.to_string(),
                    name: row.name,
                    image: row.image,
                    unit_price: row.unit_price,
                    quantity: row.quantity,
                    line_total: row.line_total,
                })
                .collect(),
        }
    }
}

/// Print queued notices. Error notices are left to the command's result.
fn flush<B: KvBackend>(ctx: &Context, store: &mut CartStore<B>) {
    for event in store.take_events() {
        match event {
            CartEvent::Notice(notice) if notice.severity != Severity::Error => {
                ctx.output.notice(&notice)
            }
            CartEvent::PersistFailed { error } => {
                ctx.output.warn(&format!("Cart could not be saved: {}", error))
            }
            _ => {}
        }
    }
}

/// `greenlink show`
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let view = CartView::new(&store);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", view.item_count));
    if view.lines.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [20, 24, 12, 5, 12];
    ctx.output.table_row(&["KEY", "NAME", "PRICE", "QTY", "TOTAL"], &widths);
    for line in &view.lines {
        ctx.output.table_row(
            &[
                &line.key,
                &line.name,
                &line.unit_price,
                &line.quantity.to_string(),
                &line.line_total,
            ],
            &widths,
        );
    }
    println!();
    ctx.output.kv("Total", &view.total);
    Ok(())
}

/// `greenlink add`
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let price = Money::price_from_decimal(args.price, store.currency())?;

    let mut item = NewLineItem::new(args.name, price, args.image);
    if let Some(id) = args.id {
        item = item.with_id(id);
    }
    let key = item.key().to_string();

    let result = store.add_item(item);
    flush(ctx, &mut store);
    let quantity = result?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "quantity": quantity }));
    } else {
        ctx.output.debug(&format!("{} now has quantity {}", key, quantity));
    }
    Ok(())
}

/// `greenlink buy`: add a catalog product.
pub fn buy(args: BuyArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get(&args.product)?;

    let item = product.to_line_item();
    let key = item.key();

    let mut store = ctx.open_store()?;
    let result = store.add_item(item);
    flush(ctx, &mut store);
    let quantity = result?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key.to_string(), "quantity": quantity }));
    }
    Ok(())
}

/// `greenlink remove`
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let result = store.remove_item(&args.key);
    flush(ctx, &mut store);

    if !result? {
        ctx.output.warn(&format!("No line with key '{}'", args.key));
    }
    Ok(())
}

/// `greenlink update`
pub fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let result = store.update_quantity(&args.key, args.delta);
    flush(ctx, &mut store);

    match result? {
        QuantityChange::Updated(quantity) => {
            if ctx.output.is_json() {
                ctx.output.json(
                    &serde_json::json!({ "key": args.key.to_string(), "quantity": quantity }),
                );
            } else {
                ctx.output
                    .success(&format!("{} quantity is now {}", args.key, quantity));
            }
        }
        QuantityChange::Removed => {}
        QuantityChange::NotFound => {
            ctx.output.warn(&format!("No line with key '{}'", args.key));
        }
    }
    Ok(())
}

/// `greenlink clear`
pub fn clear(args: ConfirmArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if !store.is_empty() {
        let prompt = format!("Remove all {} items?", store.item_count());
        if !confirm(ctx, &args, &prompt)? {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let result = store.clear();
    flush(ctx, &mut store);
    result?;
    Ok(())
}

/// `greenlink checkout`
pub fn checkout(args: ConfirmArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if !store.is_empty() {
        let prompt = format!("Place order for {}?", store.total());
        if !confirm(ctx, &args, &prompt)? {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let result = store.checkout();
    flush(ctx, &mut store);
    let receipt = result?;
    print_receipt(ctx, &receipt);
    Ok(())
}

fn print_receipt(ctx: &Context, receipt: &Receipt) {
    let placed_at = chrono::Local::now();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "placed_at": placed_at.to_rfc3339(),
            "total": receipt.total.display(),
            "item_count": receipt.item_count,
            "lines": receipt.lines.iter().map(|line| serde_json::json!({
                "key": line.key().to_string(),
                "quantity": line.quantity,
            })).collect::<Vec<_>>(),
        }));
        return;
    }

    ctx.output.kv("Placed", &placed_at.format("%Y-%m-%d %H:%M").to_string());
    ctx.output.kv("Items", &receipt.item_count.to_string());
    ctx.output.kv("Total", &receipt.total.display());
}

fn confirm(ctx: &Context, args: &ConfirmArgs, prompt: &str) -> Result<bool> {
    if args.yes || ctx.output.is_json() {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}
