//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod validate;

use clap::{Args, Subcommand};
use greenlink_commerce::cart::LineKey;

/// Arguments for the `add` command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name (the line key unless --id is given)
    pub name: String,

    /// Unit price as a decimal, e.g. 12.50
    pub price: f64,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Stable product id to key the line by
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the `buy` command.
#[derive(Args)]
pub struct BuyArgs {
    /// Catalog product id
    pub product: String,
}

/// Arguments for the `remove` command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Line key as shown by `show`: a name, or id:<product-id>
    pub key: LineKey,
}

/// Arguments for the `update` command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Line key as shown by `show`: a name, or id:<product-id>
    pub key: LineKey,

    /// Quantity change, e.g. 1 or -1
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,
}

/// Arguments for commands that discard the cart.
#[derive(Args)]
pub struct ConfirmArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `products` command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show one category ("all" shows everything)
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the validation commands.
#[derive(Args)]
pub struct ValidateArgs {
    /// Value to check
    pub value: String,
}

/// Arguments for the `config` command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default greenlink.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the config file in use
    Path,
}
