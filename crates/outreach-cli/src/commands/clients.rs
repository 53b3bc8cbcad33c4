use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::record_line;
use anyhow::Result;
use clap::Args;
use outreach_core::dto::ClientHistoryDto;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Client name; matched exactly, ignoring case
    pub name: String,
}

pub fn show_history(ctx: &Context<'_>, args: HistoryArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(invalid_input("client name cannot be empty"));
    }
    let history = ClientHistoryDto::new(args.name.clone(), ctx.store.list_by_client(&args.name));

    if ctx.json {
        return print_json(&history);
    }

    if history.records.is_empty() {
        println!("no history for {}", history.client_name);
        return Ok(());
    }
    println!("{}: {} contact(s)", history.client_name, history.total);
    for record in &history.records {
        println!("  {}", record_line(record));
    }
    Ok(())
}

pub fn list_clients(ctx: &Context<'_>) -> Result<()> {
    let names = ctx.store.list_unique_client_names();

    if ctx.json {
        return print_json(&names);
    }

    if names.is_empty() {
        println!("no clients");
        return Ok(());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
