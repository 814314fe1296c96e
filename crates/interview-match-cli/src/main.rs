//! `interview-match` CLI — list a roster, find interview slots, and book them.
//!
//! ## Usage
//!
//! ```sh
//! # List the built-in sample roster
//! interview-match candidates
//! interview-match engineers
//!
//! # Slots where candidate cand2 overlaps any engineer
//! interview-match slots --candidate cand2
//!
//! # Only consider eng1 and eng3, from a roster file, skipping booked slots
//! interview-match --roster roster.json --bookings booked.json \
//!     slots --candidate cand4 --engineer eng1 --engineer eng3
//!
//! # Machine-readable output
//! interview-match --format json slots --candidate cand1
//!
//! # Confirm a booking (appends to the bookings file)
//! interview-match --bookings booked.json book --candidate cand1 --engineer eng2 \
//!     --day tuesday --time 14:00
//!
//! # Half-open range check
//! interview-match check --time 12:00 --start 9:00 --end 12:00
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interview_match::{
    convert_time_to_minutes, find_overlapping_slots, format_time, format_time_slot,
    is_time_in_range, BookingLedger, ClockTime, DayOfWeek, InterviewDuration, OverlapSlot,
    Person, Roster, RosterSource, TimeSlot,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "interview-match",
    version,
    about = "Match candidate and engineer availability into interview slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Roster JSON file with candidates and engineers (built-in sample if omitted)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// JSON file holding already scheduled interviews
    #[arg(long, global = true)]
    bookings: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates in the roster
    Candidates,
    /// List engineers in the roster
    Engineers,
    /// Show slots where the candidate and at least one engineer are free
    Slots {
        /// Candidate id
        #[arg(short, long)]
        candidate: String,
        /// Restrict to these engineer ids (repeatable; all engineers if omitted)
        #[arg(short, long)]
        engineer: Vec<String>,
        /// Interview length in minutes
        #[arg(short, long, value_enum, default_value_t = DurationArg::Thirty)]
        duration: DurationArg,
    },
    /// Book an interview and append it to the bookings file
    Book {
        #[arg(short, long)]
        candidate: String,
        #[arg(short, long)]
        engineer: String,
        /// Day of the week (monday..friday)
        #[arg(long)]
        day: DayOfWeek,
        /// Slot start time, e.g. 14:00
        #[arg(long)]
        time: String,
        #[arg(short, long, value_enum, default_value_t = DurationArg::Thirty)]
        duration: DurationArg,
    },
    /// Check whether a time falls in [start, end)
    Check {
        #[arg(long)]
        time: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum DurationArg {
    #[value(name = "15")]
    Fifteen,
    #[value(name = "30")]
    Thirty,
    #[value(name = "60")]
    Sixty,
}

impl From<DurationArg> for InterviewDuration {
    fn from(arg: DurationArg) -> Self {
        match arg {
            DurationArg::Fifteen => InterviewDuration::Fifteen,
            DurationArg::Thirty => InterviewDuration::Thirty,
            DurationArg::Sixty => InterviewDuration::Sixty,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let roster = load_roster(cli.roster.as_deref())?;
    let mut ledger = load_bookings(cli.bookings.as_deref())?;
    debug!(
        candidates = roster.candidates.len(),
        engineers = roster.engineers.len(),
        bookings = ledger.len(),
        "loaded inputs"
    );

    match cli.command {
        Commands::Candidates => print_people(&roster.candidates, cli.format)?,
        Commands::Engineers => print_people(&roster.engineers, cli.format)?,
        Commands::Slots {
            candidate,
            engineer,
            duration,
        } => {
            let candidate = roster.candidate(&candidate)?;
            let engineers = roster.engineer_filter(&engineer)?;
            let slots = find_overlapping_slots(
                &candidate.availability,
                &engineers,
                ledger.interviews(),
                duration.into(),
            );
            print_slots(&roster, &slots, cli.format)?;
        }
        Commands::Book {
            candidate,
            engineer,
            day,
            time,
            duration,
        } => {
            let path = cli
                .bookings
                .as_deref()
                .context("book requires --bookings <file> to record the interview")?;
            // Slots are matched by exact string, so write the time the way
            // the generator does ("09:00" becomes "9:00").
            let time: ClockTime = time
                .parse()
                .with_context(|| format!("Invalid --time: {}", time))?;

            let slot = TimeSlot::new(day, time.to_string());
            let booked = ledger
                .book(&roster, &candidate, &engineer, slot, duration.into())
                .context("Failed to book interview")?
                .clone();
            save_bookings(path, &ledger)?;

            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&booked)?),
                Format::Text => println!(
                    "Booked {} with {} on {}",
                    booked.candidate_id,
                    booked.engineer_id,
                    format_time_slot(&booked.time_slot)?
                ),
            }
        }
        Commands::Check { time, start, end } => {
            for (flag, value) in [("--time", &time), ("--start", &start), ("--end", &end)] {
                convert_time_to_minutes(value)
                    .with_context(|| format!("Invalid {}: {}", flag, value))?;
            }
            println!("{}", is_time_in_range(&time, &start, &end));
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piping.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster: {}", path.display()))?;
            Roster::from_json(&json)
                .with_context(|| format!("Invalid roster: {}", path.display()))
        }
        None => Ok(Roster::sample()),
    }
}

/// A missing bookings file is an empty ledger; it is created on first booking.
fn load_bookings(path: Option<&Path>) -> Result<BookingLedger> {
    match path {
        Some(path) if path.exists() => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read bookings: {}", path.display()))?;
            BookingLedger::from_json(&json)
                .with_context(|| format!("Invalid bookings: {}", path.display()))
        }
        _ => Ok(BookingLedger::new()),
    }
}

fn save_bookings(path: &Path, ledger: &BookingLedger) -> Result<()> {
    std::fs::write(path, ledger.to_json()?)
        .with_context(|| format!("Failed to write bookings: {}", path.display()))
}

fn print_people(people: &[Person], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(people)?),
        Format::Text => {
            for person in people {
                match &person.preferred_time_description {
                    Some(preferred) => {
                        println!("{}\t{}\t(prefers {})", person.id, person.name, preferred)
                    }
                    None => println!("{}\t{}", person.id, person.name),
                }
            }
        }
    }
    Ok(())
}

/// Text mode groups slots under a day heading and names each engineer.
fn print_slots(roster: &Roster, slots: &[OverlapSlot], format: Format) -> Result<()> {
    if let Format::Json = format {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("No overlapping slots.");
        return Ok(());
    }

    let mut current_day = None;
    for slot in slots {
        if current_day != Some(slot.time_slot.day) {
            current_day = Some(slot.time_slot.day);
            println!("{}", interview_match::day_name(slot.time_slot.day));
        }
        let names: Vec<String> = slot
            .available_engineers
            .iter()
            .map(|id| match roster.engineer(id) {
                Ok(engineer) => format!("{} ({})", engineer.name, id),
                Err(_) => id.clone(),
            })
            .collect();
        println!(
            "  {:>8}  {}",
            format_time(&slot.time_slot.time)?,
            names.join(", ")
        );
    }
    Ok(())
}
