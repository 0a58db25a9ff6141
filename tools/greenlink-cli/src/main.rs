//! GreenLink CLI - drive the storefront cart from the command line.
//!
//! Commands:
//! - `greenlink show` - Show the persisted cart
//! - `greenlink add` / `buy` - Add an item or a catalog product
//! - `greenlink remove` / `update` - Change cart lines
//! - `greenlink clear` / `checkout` - Empty the cart or place the order
//! - `greenlink products` - List the catalog by category
//! - `greenlink validate-email` / `validate-phone` - Check contact fields
//! - `greenlink config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AddArgs, BuyArgs, ConfigArgs, ConfirmArgs, ProductsArgs, RemoveArgs, UpdateArgs, ValidateArgs,
};
use config::LogFormat;

/// GreenLink CLI - Manage the storefront cart and catalog
#[derive(Parser)]
#[command(name = "greenlink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding cart slot files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show,

    /// Add one unit of an item
    Add(AddArgs),

    /// Add one unit of a catalog product
    Buy(BuyArgs),

    /// Remove a line from the cart
    Remove(RemoveArgs),

    /// Change a line's quantity
    Update(UpdateArgs),

    /// Empty the cart
    Clear(ConfirmArgs),

    /// Place the order and empty the cart
    Checkout(ConfirmArgs),

    /// List catalog products
    Products(ProductsArgs),

    /// Check an email address
    ValidateEmail(ValidateArgs),

    /// Check a phone number
    ValidatePhone(ValidateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let mut ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(dir) = cli.data_dir {
        ctx.config.store.data_dir = Some(dir);
    }
    if cli.json {
        ctx.config.logging.format = LogFormat::Json;
    }
    logging::init(&ctx.config.logging, cli.verbose);
    for (path, reason) in &ctx.skipped_configs {
        tracing::warn!(path = %path.display(), "ignoring config: {}", reason);
    }

    // Execute command
    let result = match cli.command {
        Commands::Show => commands::cart::show(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Buy(args) => commands::cart::buy(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Update(args) => commands::cart::update(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Checkout(args) => commands::cart::checkout(args, &ctx),
        Commands::Products(args) => commands::catalog::run(args, &ctx),
        Commands::ValidateEmail(args) => commands::validate::email(args, &ctx),
        Commands::ValidatePhone(args) => commands::validate::phone(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
