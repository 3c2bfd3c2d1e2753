use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{print_contact_detail, print_contact_line};
use anyhow::Result;
use clap::Args;
use rolodex_core::{ContactUpdate, NewContact};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Maximum number of contacts to return
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring matched against the contact's composite name
    pub query: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let contacts = ctx.book.list_contacts(args.limit)?;
    if ctx.json {
        return print_json(&contacts);
    }
    if contacts.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for contact in &contacts {
        print_contact_line(contact);
    }
    Ok(())
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let contacts = ctx.book.search_contacts(&args.query)?;
    if ctx.json {
        return print_json(&contacts);
    }
    if contacts.is_empty() {
        println!("no contacts matching '{}'", args.query);
        return Ok(());
    }
    for contact in &contacts {
        print_contact_line(contact);
    }
    Ok(())
}

pub fn get_contact(ctx: &Context<'_>, args: GetArgs) -> Result<()> {
    let contact = ctx
        .book
        .get_contact(&args.id)?
        .ok_or_else(|| not_found("contact not found"))?;
    if ctx.json {
        return print_json(&contact);
    }
    print_contact_detail(&contact);
    Ok(())
}

pub fn create_contact(ctx: &Context<'_>, args: CreateArgs) -> Result<()> {
    let draft = NewContact {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        organization: args.organization,
        job_title: args.job_title,
    };
    let id = ctx.book.create_contact(&draft)?;
    if ctx.json {
        return print_json(&serde_json::json!({ "id": id, "success": true }));
    }
    println!("created {}", id);
    Ok(())
}

pub fn update_contact(ctx: &Context<'_>, args: UpdateArgs) -> Result<()> {
    let patch = ContactUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        organization: args.organization,
        job_title: args.job_title,
    };
    let applied = ctx.book.update_contact(&args.id, &patch)?;
    if ctx.json {
        return print_json(&serde_json::json!({ "success": applied }));
    }
    if applied {
        println!("updated {}", args.id);
    } else {
        println!("no update applied (contact missing or no fields given)");
    }
    Ok(())
}

pub fn delete_contact(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let deleted = ctx.book.delete_contact(&args.id)?;
    if ctx.json {
        return print_json(&serde_json::json!({ "success": deleted }));
    }
    if deleted {
        println!("deleted {}", args.id);
    } else {
        println!("no matching contact {}", args.id);
    }
    Ok(())
}
