use crate::commands::{print_json, Context};
use anyhow::{bail, Result};
use clap::Args;
use rolodex_core::AuthorizationStatus;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print the status only, without guidance
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct AuthorizeArgs {}

pub fn show_status(ctx: &Context<'_>, args: StatusArgs) -> Result<()> {
    let status = ctx.book.authorization_status();
    print_status(ctx, status, args.quiet)
}

pub fn authorize(ctx: &Context<'_>, _args: AuthorizeArgs) -> Result<()> {
    let current = ctx.book.authorization_status();
    let status = if current == AuthorizationStatus::NotDetermined {
        ctx.book.request_access()
    } else {
        current
    };
    print_status(ctx, status, false)?;
    if !status.is_authorized() {
        bail!("contacts access not granted");
    }
    Ok(())
}

fn print_status(ctx: &Context<'_>, status: AuthorizationStatus, quiet: bool) -> Result<()> {
    if ctx.json {
        return print_json(&serde_json::json!({
            "status": status.as_str(),
            "authorized": status.is_authorized(),
        }));
    }
    println!("Contacts access: {}", status.display_name());
    if !quiet && !status.is_authorized() {
        println!("{}", status.guidance());
    }
    Ok(())
}
