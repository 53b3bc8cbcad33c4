use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use outreach_store::paths;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON array of contact records, as written by `export`
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
struct TransferReport {
    path: String,
    records: usize,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let out = match args.out {
        Some(path) => path,
        None => paths::export_path()?,
    };

    let snapshot = ctx.store.export_json()?;
    let records = ctx.store.list_all().len();
    paths::write_private(&out, &snapshot)
        .with_context(|| format!("write export {}", out.display()))?;

    if ctx.json {
        return print_json(&TransferReport {
            path: out.display().to_string(),
            records,
        });
    }

    println!("Exported {} record(s) to {}", records, out.display());
    Ok(())
}

pub fn import(ctx: &Context<'_>, args: ImportArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.path)
        .with_context(|| format!("read import file {}", args.path.display()))?;
    let records = ctx
        .store
        .import_json(&raw)
        .with_context(|| format!("import {}", args.path.display()))?;

    if ctx.json {
        return print_json(&TransferReport {
            path: args.path.display().to_string(),
            records,
        });
    }

    println!("Imported {} record(s) from {}", records, args.path.display());
    Ok(())
}
