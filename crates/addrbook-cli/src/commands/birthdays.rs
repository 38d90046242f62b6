use crate::commands::{print_json, Context};
use crate::util::{days_label, parse_leap_day, parse_reference_date, parse_window_days};
use addrbook_core::rules::YearWrap;
use addrbook_core::time::format_date;
use addrbook_core::UpcomingBirthdayDto;
use anyhow::Result;
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Window length in days, counted from the reference date.
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,
    /// Reference date as DD.MM.YYYY; defaults to the local date.
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
    #[arg(long, value_name = "POLICY")]
    pub leap_day: Option<String>,
    /// Also count next year's occurrence when this year's has passed.
    #[arg(long)]
    pub wrap_year: bool,
}

pub fn upcoming_birthdays(ctx: &Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let days = parse_window_days(args.days.unwrap_or(ctx.config.upcoming_days))?;
    let reference = parse_reference_date(args.today.as_deref())?;
    let mut policy = ctx.config.upcoming_policy();
    if let Some(raw) = args.leap_day.as_deref() {
        policy.leap_day = parse_leap_day(raw)?;
    }
    if args.wrap_year {
        policy.year_wrap = YearWrap::NextYear;
    }
    debug!(
        days,
        reference = %format_date(reference),
        leap_day = policy.leap_day.as_str(),
        "querying upcoming birthdays"
    );

    let upcoming = ctx.directory.upcoming(days, reference, &policy);
    let dtos: Vec<UpcomingBirthdayDto> = upcoming.iter().map(UpcomingBirthdayDto::from).collect();

    if ctx.json {
        return print_json(&dtos);
    }

    if dtos.is_empty() {
        println!("no upcoming birthdays");
        return Ok(());
    }
    for item in dtos {
        println!(
            "{}  {}  {}  (born {})",
            item.date,
            item.name,
            days_label(item.days_until),
            item.birthday
        );
    }
    Ok(())
}
