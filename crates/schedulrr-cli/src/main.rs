//! `schedulrr` CLI — compute bookable slots from a host snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for the next 30 days (snapshot on stdin, JSON on stdout)
//! cat host.json | schedulrr slots
//!
//! # Pin "now" and the server-local zone, write to a file
//! schedulrr slots -i host.json -o slots.json \
//!     --now 2026-03-16T14:30:00Z --timezone Europe/Berlin
//!
//! # Is a requested range still free?
//! schedulrr check -i host.json --start 2026-03-17T10:00:00Z --end 2026-03-17T11:00:00Z
//!
//! # Normalize a username for a public booking URL
//! schedulrr slug "Ada Lovelace"
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the level chosen by `-v`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use slot_engine::{DaySlots, DstPolicy, HostSnapshot, SlotRules, DEFAULT_HORIZON_DAYS};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schedulrr",
    version,
    about = "Bookable slot generation for Schedulrr hosts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print bookable slots per day as JSON
    Slots {
        /// Host snapshot JSON file (stdin if omitted or `-`)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted or `-`)
        #[arg(short, long)]
        output: Option<String>,
        /// Current instant as RFC 3339 (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,
        /// IANA timezone the host's windows are expressed in
        #[arg(long, env = "SCHEDULRR_TIMEZONE", default_value = "UTC")]
        timezone: String,
        /// Days past today to include
        #[arg(long, env = "SCHEDULRR_HORIZON_DAYS", default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,
        /// How window boundaries inside a DST gap are handled
        #[arg(long, value_enum, default_value_t = DstPolicyArg::ShiftForward)]
        dst_policy: DstPolicyArg,
    },
    /// Check whether a time range collides with existing bookings
    Check {
        /// Host snapshot JSON file (stdin if omitted or `-`)
        #[arg(short, long)]
        input: Option<String>,
        /// Range start as RFC 3339
        #[arg(long)]
        start: String,
        /// Range end as RFC 3339
        #[arg(long)]
        end: String,
    },
    /// Normalize a username into a URL slug
    Slug {
        /// Requested username
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DstPolicyArg {
    ShiftForward,
    Skip,
}

impl From<DstPolicyArg> for DstPolicy {
    fn from(arg: DstPolicyArg) -> Self {
        match arg {
            DstPolicyArg::ShiftForward => DstPolicy::ShiftForward,
            DstPolicyArg::Skip => DstPolicy::Skip,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Slots {
            input,
            output,
            now,
            timezone,
            horizon,
            dst_policy,
        } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let tz: Tz = slot_engine::parse_timezone(&timezone)?;
            let now = match now.as_deref() {
                Some(raw) => parse_instant(raw)?,
                None => Utc::now(),
            }
            .with_timezone(&tz);

            let rules = SlotRules {
                horizon_days: horizon,
                dst_policy: dst_policy.into(),
            };
            debug!(%now, %tz, horizon, "computing availability");

            let days = snapshot.available_slots(&now, &rules);
            info!(
                event_id = %snapshot.event.id,
                days = days.len(),
                slots = days.iter().map(|d| d.slots.len()).sum::<usize>(),
                "availability computed"
            );

            write_days(output.as_deref(), &days)?;
        }
        Commands::Check { input, start, end } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let start = parse_instant(&start)?;
            let end = parse_instant(&end)?;
            if start >= end {
                anyhow::bail!("--end must be after --start");
            }

            let conflicts = slot_engine::overlapping_bookings(start, end, &snapshot.bookings);
            if conflicts.is_empty() {
                println!("available");
            } else {
                for b in &conflicts {
                    debug!(start = %b.start_time, end = %b.end_time, "conflicting booking");
                }
                println!("unavailable: {} conflicting booking(s)", conflicts.len());
                process::exit(1);
            }
        }
        Commands::Slug { name } => {
            let slug = slot_engine::validate_username(&name)?;
            println!("{}", slug);
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", raw))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Load the host snapshot from `path`, or from stdin when `path` is absent
/// or `-`.
fn read_snapshot(path: Option<&str>) -> Result<HostSnapshot> {
    let json = match path.filter(|p| *p != "-") {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read host snapshot from stdin")?;
            buf
        }
    };
    HostSnapshot::from_json(&json).context("Failed to parse host snapshot")
}

/// Write the per-day slot lists as pretty JSON, newline-terminated, to `path`
/// or stdout.
fn write_days(path: Option<&str>, days: &[DaySlots]) -> Result<()> {
    let sink: Box<dyn Write> = match path.filter(|p| *p != "-") {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("Failed to write file: {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);
    serde_json::to_writer_pretty(&mut out, days).context("Failed to serialize slots")?;
    writeln!(out)?;
    out.flush().context("Failed to flush slot output")?;
    Ok(())
}
