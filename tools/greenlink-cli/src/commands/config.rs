//! Config command.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// `greenlink config`
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
        ConfigCommand::Path => {
            match &ctx.config_path {
                Some(path) => println!("{}", path.display()),
                None => ctx.output.info("No config file found; using defaults"),
            }
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv("Slot", &ctx.config.store.slot);
    ctx.output.kv("Currency", ctx.config.store.currency.code());
    ctx.output.kv("Data dir", &ctx.data_dir().display().to_string());
    let catalog = match &ctx.config.catalog.path {
        Some(path) => ctx.resolve_path(path).display().to_string(),
        None => "built-in".to_string(),
    };
    ctx.output.kv("Catalog", &catalog);
    ctx.output.kv("Toast TTL", &format!("{}ms", ctx.config.view.toast_ttl_ms));
    ctx.output.kv("Log level", &ctx.config.logging.level);
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}
