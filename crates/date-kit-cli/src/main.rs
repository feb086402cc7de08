mod logging;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use date_kit::{
    business_days_between, checked_add_days, checked_next_business_day, convert_time_zone,
    format_date, is_business_day, is_weekend, relative_time, time_ago, time_until,
    to_readable_string, CalendarDate, MonthOverflow, RecurrenceRequest,
};
use serde_json::{json, Value};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "datekit",
    version,
    about = "Business days, recurring dates, relative time and timezone conversion"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a date through a pattern with YYYY, MM and DD tokens
    Format { date: CalendarDate, pattern: String },
    /// Render a date as "<day> <month name> <year>"
    Readable { date: CalendarDate },
    /// Shift a date by a number of calendar days
    AddDays {
        date: CalendarDate,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Check whether a date falls on a weekend
    Weekend { date: CalendarDate },
    /// Check whether a date is a business day (Monday-Friday)
    BusinessDay { date: CalendarDate },
    /// First business day strictly after a date
    NextBusinessDay { date: CalendarDate },
    /// Count business days in [start, end], both ends included
    BusinessDays { start: CalendarDate, end: CalendarDate },
    /// Generate recurring dates (daily, weekly, monthly, yearly)
    Recur {
        start: CalendarDate,
        frequency: String,
        count: usize,
        /// How monthly/yearly steps resolve a missing day-of-month
        #[arg(long, value_enum, default_value_t = Overflow::Clamp)]
        overflow: Overflow,
    },
    /// How long ago a date was
    Ago {
        date: CalendarDate,
        /// Reference instant (defaults to the system clock)
        #[arg(long, env = "DATEKIT_NOW")]
        now: Option<CalendarDate>,
    },
    /// How far in the future a date is
    Until {
        date: CalendarDate,
        /// Reference instant (defaults to the system clock)
        #[arg(long, env = "DATEKIT_NOW")]
        now: Option<CalendarDate>,
    },
    /// Express a date in an IANA timezone
    Convert { date: CalendarDate, zone: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Overflow {
    Clamp,
    Roll,
}

impl From<Overflow> for MonthOverflow {
    fn from(overflow: Overflow) -> Self {
        match overflow {
            Overflow::Clamp => MonthOverflow::Clamp,
            Overflow::Roll => MonthOverflow::Roll,
        }
    }
}

/// A command result in both renderings.
struct Output {
    text: String,
    json: Value,
}

impl Output {
    fn new(text: impl Into<String>, json: Value) -> Self {
        Self {
            text: text.into(),
            json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = run(cli.command)?;
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output.json).context("failed to render JSON")?
        );
    } else {
        println!("{}", output.text);
    }
    Ok(())
}

fn run(command: Command) -> Result<Output> {
    let output = match command {
        Command::Format { date, pattern } => {
            let formatted = format_date(date, &pattern);
            Output::new(formatted.clone(), json!({ "formatted": formatted }))
        }
        Command::Readable { date } => {
            let readable = to_readable_string(date);
            Output::new(readable.clone(), json!({ "readable": readable }))
        }
        Command::AddDays { date, days } => {
            let shifted = checked_add_days(date, days)
                .with_context(|| format!("{date} + {days} day(s) is out of range"))?;
            Output::new(shifted.to_string(), json!({ "date": shifted }))
        }
        Command::Weekend { date } => {
            let weekend = is_weekend(date);
            Output::new(weekend.to_string(), json!({ "weekend": weekend }))
        }
        Command::BusinessDay { date } => {
            let business = is_business_day(date);
            Output::new(business.to_string(), json!({ "business_day": business }))
        }
        Command::NextBusinessDay { date } => {
            let next = checked_next_business_day(date)
                .with_context(|| format!("no business day after {date} is in range"))?;
            Output::new(next.to_string(), json!({ "date": next }))
        }
        Command::BusinessDays { start, end } => {
            let count = business_days_between(start, end);
            Output::new(count.to_string(), json!({ "business_days": count }))
        }
        Command::Recur {
            start,
            frequency,
            count,
            overflow,
        } => {
            let request = RecurrenceRequest::parse(start, &frequency, count)
                .context("invalid recurrence")?
                .with_month_overflow(overflow.into());
            let dates = request.expand().context("failed to expand recurrence")?;
            info!(count = dates.len(), "generated recurring dates");
            let text = dates
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            Output::new(text, json!({ "request": request, "dates": dates }))
        }
        Command::Ago { date, now } => {
            let now = now.unwrap_or_else(|| CalendarDate::from_utc(Utc::now()));
            Output::new(
                time_ago(date, now),
                json!({ "phrase": time_ago(date, now), "relative": relative_time(date, now) }),
            )
        }
        Command::Until { date, now } => {
            let now = now.unwrap_or_else(|| CalendarDate::from_utc(Utc::now()));
            Output::new(
                time_until(date, now),
                json!({ "phrase": time_until(date, now), "relative": relative_time(date, now) }),
            )
        }
        Command::Convert { date, zone } => {
            let converted = convert_time_zone(date, &zone)
                .with_context(|| format!("cannot convert {date} to {zone}"))?;
            Output::new(
                converted.to_string(),
                json!({
                    "utc": converted.to_utc().to_rfc3339(),
                    "local": converted,
                    "timezone": zone,
                }),
            )
        }
    };
    Ok(output)
}
