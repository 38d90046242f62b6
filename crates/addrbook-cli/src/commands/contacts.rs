use crate::commands::{print_json, Context};
use crate::error::not_found;
use addrbook_core::{Record, RecordDto};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct FindPhoneArgs {
    pub name: String,
    pub phone: String,
}

pub fn list_contacts(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    if ctx.json {
        let dtos: Vec<RecordDto> = ctx.directory.iter().map(RecordDto::from).collect();
        return print_json(&dtos);
    }

    if ctx.directory.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for record in ctx.directory {
        println!("{record}");
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let record = find_record(ctx, &args.name)?;
    if ctx.json {
        print_json(&RecordDto::from(record))
    } else {
        println!("{record}");
        Ok(())
    }
}

pub fn find_phone(ctx: &Context<'_>, args: FindPhoneArgs) -> Result<()> {
    let record = find_record(ctx, &args.name)?;
    let phone = record
        .find_phone(&args.phone)
        .ok_or_else(|| not_found(format!("phone {} for {}", args.phone, args.name)))?;
    if ctx.json {
        print_json(&serde_json::json!({
            "name": record.name().as_str(),
            "phone": phone.as_str(),
        }))
    } else {
        println!("{}: {}", record.name(), phone);
        Ok(())
    }
}

fn find_record<'a>(ctx: &Context<'a>, name: &str) -> Result<&'a Record> {
    ctx.directory
        .find(name)
        .ok_or_else(|| not_found(format!("contact {name}")))
}
