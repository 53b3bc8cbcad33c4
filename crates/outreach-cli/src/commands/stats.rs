use crate::commands::{print_json, Context};
use anyhow::Result;
use outreach_core::rules::summarize;
use outreach_core::time::today_local;

pub fn show_stats(ctx: &Context<'_>) -> Result<()> {
    let snapshot = ctx.store.list_all();
    let summary = summarize(&snapshot, today_local());

    if ctx.json {
        return print_json(&summary);
    }

    println!("contacts today: {}", summary.today);
    println!("clients: {}", summary.unique_clients);
    println!("records: {}", summary.total);
    println!("in progress: {}", summary.in_progress);
    for (status, count) in &summary.status_counts {
        println!("  {}: {}", status.label(), count);
    }
    Ok(())
}
