use crate::commands::{print_json, Context};
use crate::util::print_contact_line;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// List contact groups
    Ls(LsArgs),
    /// List the members of a group
    Members(MembersArgs),
}

#[derive(Debug, Args)]
pub struct LsArgs {}

#[derive(Debug, Args)]
pub struct MembersArgs {
    /// Group name (exact match)
    pub name: String,
}

pub fn list_groups(ctx: &Context<'_>, _args: LsArgs) -> Result<()> {
    let groups = ctx.book.list_groups()?;
    if ctx.json {
        return print_json(&groups);
    }
    if groups.is_empty() {
        println!("no groups");
        return Ok(());
    }
    for group in &groups {
        println!("{}  {}  ({} members)", group.id, group.name, group.member_count);
    }
    Ok(())
}

pub fn group_members(ctx: &Context<'_>, args: MembersArgs) -> Result<()> {
    let members = ctx.book.group_members(&args.name)?;
    if ctx.json {
        return print_json(&members);
    }
    if members.is_empty() {
        println!("no contacts in group '{}'", args.name);
        return Ok(());
    }
    for contact in &members {
        print_contact_line(contact);
    }
    Ok(())
}
