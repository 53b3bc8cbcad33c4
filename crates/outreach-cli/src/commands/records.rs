use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{now_utc, parse_record_id, print_record_detail, record_line};
use anyhow::Result;
use clap::Args;
use outreach_core::filter::apply_filter;
use outreach_core::time::{parse_date, today_local};
use outreach_core::{
    ClientStatus, ContactDraft, ContactMethod, ContactRecordPatch, RecordFilter, StatusFilter,
};
use std::io::{self, Read};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub enterprise: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    /// telefone|whatsapp|email|presencial (or phone, in-person)
    #[arg(long)]
    pub method: Option<String>,
    /// Phone number or e-mail used for this contact
    #[arg(long)]
    pub info: Option<String>,
    /// Contact date as YYYY-MM-DD; defaults to today
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub obs: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Matches client, enterprise or unit
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Debug, Args)]
pub struct SetStatusArgs {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Args)]
pub struct EditObsArgs {
    pub id: String,
    /// New observation text; read from stdin when omitted. Empty text clears it.
    #[arg(long)]
    pub obs: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn add_record(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    let contact_method = match args.method {
        Some(raw) => ContactMethod::from_str(&raw)?,
        None => ctx.config.defaults.contact_method,
    };
    let status = match args.status {
        Some(raw) => ClientStatus::from_str(&raw)?,
        None => ctx.config.defaults.status,
    };
    let contact_date = match args.date {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    let draft = ContactDraft {
        enterprise: args.enterprise.unwrap_or_default(),
        client_name: args.client.unwrap_or_default(),
        unit: args.unit.unwrap_or_default(),
        contact_method: Some(contact_method),
        contact_info: args.info,
        contact_date,
        observations: args.obs.unwrap_or_default(),
        status: Some(status),
    };
    let input = draft.validate(today_local())?;
    let record = ctx.store.create(now_utc(), input)?;

    if ctx.json {
        print_json(&record)?;
    } else {
        println!("created {} {}", record.id, record.client_name);
    }
    Ok(())
}

pub fn list_records(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filter = RecordFilter::new(
        args.search.unwrap_or_default(),
        StatusFilter::from_str(&args.status)?,
    );
    let snapshot = ctx.store.list_all();
    let matches = apply_filter(&snapshot, &filter);

    if ctx.json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for record in matches {
        println!("{}", record_line(record));
    }
    Ok(())
}

pub fn set_status(ctx: &Context<'_>, args: SetStatusArgs) -> Result<()> {
    let id = parse_record_id(&args.id)?;
    let status = ClientStatus::from_str(&args.status)?;
    let record = ctx
        .store
        .update(now_utc(), id, ContactRecordPatch::status(status))?
        .ok_or_else(|| not_found(format!("no record with id {}", id)))?;

    if ctx.json {
        print_json(&record)?;
    } else {
        println!("status of {} set to {}", record.id, record.status.label());
    }
    Ok(())
}

pub fn edit_observations(ctx: &Context<'_>, args: EditObsArgs) -> Result<()> {
    let id = parse_record_id(&args.id)?;
    let observations = match args.obs {
        Some(value) => value.trim().to_string(),
        None => read_observations_from_stdin()?,
    };
    let record = ctx
        .store
        .update(now_utc(), id, ContactRecordPatch::observations(observations))?
        .ok_or_else(|| not_found(format!("no record with id {}", id)))?;

    if ctx.json {
        print_json(&record)?;
    } else {
        print_record_detail(&record);
    }
    Ok(())
}

pub fn delete_record(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_record_id(&args.id)?;
    if !ctx.store.delete(id)? {
        return Err(not_found(format!("no record with id {}", id)));
    }
    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

fn read_observations_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim().to_string())
}
