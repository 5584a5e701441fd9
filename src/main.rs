mod commands;
mod prompt;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventry_core::config::EventryConfig;
use eventry_core::registry::Registry;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventry")]
#[command(about = "Manage events and their attendees in a flat-file registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event (prompts for any field not given as a flag)
    Add {
        /// Event kind: wedding, birthday or business
        #[arg(short, long)]
        kind: Option<String>,

        /// Event name/title (business events only; others derive theirs)
        #[arg(short, long)]
        name: Option<String>,

        /// Event date (DD/MM/YYYY)
        #[arg(short, long)]
        date: Option<String>,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Event location
        #[arg(short, long)]
        location: Option<String>,

        /// Bride and groom / celebrant / host, depending on kind
        #[arg(short, long)]
        role: Option<String>,
    },
    /// List all events
    List,
    /// Show the details of one event
    View {
        /// Event id, matched against the stored field as text
        id: String,
    },
    /// Edit a single attribute of an event
    Edit {
        id: u64,

        /// One of: name, date, time, location
        #[arg(short, long)]
        attribute: Option<String>,

        /// The new value
        #[arg(short, long)]
        value: Option<String>,
    },
    /// Delete an event
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Manage attendees of events
    #[command(subcommand)]
    Attendee(AttendeeCommands),
}

#[derive(Subcommand)]
enum AttendeeCommands {
    /// Add an attendee to an event
    Add {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        surname: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Id of the event they are attending
        #[arg(long)]
        event_id: Option<String>,
    },
    /// List the attendees of an event
    List { event_id: u64 },
    /// Delete an attendee from an event
    Delete {
        attendee_id: u64,
        event_id: u64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = EventryConfig::load()?;
    tracing::debug!(data_dir = %config.data_dir.display(), "registry located");
    let registry = Registry::new(&config);

    match cli.command {
        Commands::Add {
            kind,
            name,
            date,
            time,
            location,
            role,
        } => commands::add::run(&registry, kind, name, date, time, location, role),
        Commands::List => commands::list::run(&registry),
        Commands::View { id } => commands::view::run(&registry, &id),
        Commands::Edit {
            id,
            attribute,
            value,
        } => commands::edit::run(&registry, id, attribute, value),
        Commands::Delete { id, yes } => commands::delete::run(&registry, id, yes),
        Commands::Attendee(cmd) => match cmd {
            AttendeeCommands::Add {
                first_name,
                surname,
                email,
                phone,
                event_id,
            } => commands::attendee::add(&registry, first_name, surname, email, phone, event_id),
            AttendeeCommands::List { event_id } => commands::attendee::list(&registry, event_id),
            AttendeeCommands::Delete {
                attendee_id,
                event_id,
                yes,
            } => commands::attendee::delete(&registry, attendee_id, event_id, yes),
        },
    }
}

/// Diagnostics go to stderr so they never interleave with rendered output.
/// Quiet by default; enable with e.g. EVENTRY_LOG=debug.
fn init_logging() {
    let filter = EnvFilter::try_from_env("EVENTRY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
