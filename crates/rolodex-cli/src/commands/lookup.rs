use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Phone number to look up (e.g. +31648502148)
    pub phone_number: String,
}

pub fn lookup_phone(ctx: &Context<'_>, args: LookupArgs) -> Result<()> {
    let contact = ctx.book.lookup_by_phone(&args.phone_number)?;
    if ctx.json {
        return match &contact {
            Some(contact) => print_json(contact),
            None => print_json(&serde_json::json!({ "found": false })),
        };
    }
    match contact {
        Some(contact) => println!("{}", contact.full_name),
        None => println!("Unknown"),
    }
    Ok(())
}
