use anyhow::Result;
use rolodex_bridge::AddressBook;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod groups;
pub mod lookup;
pub mod status;

pub struct Context<'a> {
    pub book: &'a AddressBook,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
