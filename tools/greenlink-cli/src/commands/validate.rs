//! Contact field checks.

use anyhow::{bail, Result};
use greenlink_view::contact::{is_valid_email, is_valid_phone};

use super::ValidateArgs;
use crate::context::Context;
use crate::output::verdict;

/// `greenlink validate-email`
pub fn email(args: ValidateArgs, ctx: &Context) -> Result<()> {
    report(ctx, "email", &args.value, is_valid_email(&args.value))
}

/// `greenlink validate-phone`
pub fn phone(args: ValidateArgs, ctx: &Context) -> Result<()> {
    report(ctx, "phone", &args.value, is_valid_phone(&args.value))
}

fn report(ctx: &Context, kind: &str, value: &str, valid: bool) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "kind": kind, "value": value, "valid": valid }));
    } else {
        println!("{} {}: {}", kind, value, verdict(valid));
    }

    if !valid {
        bail!("Invalid {}", kind);
    }
    Ok(())
}
