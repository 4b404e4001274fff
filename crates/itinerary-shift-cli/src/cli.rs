//! CLI argument definitions.
//!
//! Uses `clap` derive macros. Each subcommand has its own argument struct.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use itinerary_shift::{parse_timestamp, MissingAnchorPolicy};

/// Timezone whose wall clock defines "now" unless `--timezone` says otherwise.
pub const DEFAULT_TIMEZONE: &str = "Europe/Brussels";

/// Replay a captured travel itinerary as if it started at a new date and
/// time, shifting every timestamp in the JSON document by one offset.
#[derive(Debug, Parser)]
#[command(name = "itinerary-shift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log anchor and offset decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite every timestamp so the itinerary departs at the new base time.
    Shift(ShiftArgs),

    /// Print the itinerary's own departure time.
    Anchor(AnchorArgs),

    /// List the example itineraries in a directory.
    Scenarios(ScenariosArgs),
}

/// Arguments for the `shift` subcommand.
#[derive(Debug, clap::Args)]
pub struct ShiftArgs {
    /// JSON document to rewrite. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub base: BaseArgs,

    /// What to do when the departure time cannot be found.
    #[arg(long, value_enum, default_value_t = AnchorPolicy::UseNow)]
    pub on_missing_anchor: AnchorPolicy,

    /// Write the result to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON instead of four-space indentation.
    #[arg(long)]
    pub compact: bool,

    /// Print notices to stderr as a JSON array.
    #[arg(long)]
    pub notices_json: bool,
}

/// Where the itinerary should start.
///
/// Without any of these flags the itinerary departs now, in `--timezone`.
#[derive(Debug, clap::Args)]
pub struct BaseArgs {
    /// New departure as a full timestamp, e.g. `2024-03-10T09:00:00`.
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_base,
          conflicts_with_all = ["date", "time"])]
    pub base: Option<NaiveDateTime>,

    /// New departure date. The time defaults to now.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New departure time. The date defaults to today.
    #[arg(long, value_name = "HH:MM[:SS]", value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// IANA timezone whose wall clock defines "now".
    #[arg(long, value_name = "TZ", default_value = DEFAULT_TIMEZONE, value_parser = parse_timezone)]
    pub timezone: Tz,
}

/// Arguments for the `anchor` subcommand.
#[derive(Debug, clap::Args)]
pub struct AnchorArgs {
    /// JSON document to inspect. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

/// Arguments for the `scenarios` subcommand.
#[derive(Debug, clap::Args)]
pub struct ScenariosArgs {
    /// Directory holding `*.json` itineraries.
    pub dir: PathBuf,
}

/// CLI spelling of [`MissingAnchorPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnchorPolicy {
    /// Use the current time as the anchor and warn.
    UseNow,
    /// Abort.
    Fail,
}

impl From<AnchorPolicy> for MissingAnchorPolicy {
    fn from(policy: AnchorPolicy) -> Self {
        match policy {
            AnchorPolicy::UseNow => MissingAnchorPolicy::UseNow,
            AnchorPolicy::Fail => MissingAnchorPolicy::Fail,
        }
    }
}

fn parse_base(s: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(s).ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM:SS, got '{s}'"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("'{s}': {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("'{s}': {e}"))
}

fn parse_timezone(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|_| format!("'{s}' is not an IANA timezone"))
}
