mod commands;
mod datetime;
mod render;
mod utils;
mod view;

use anyhow::Result;
use buzzboard_core::event::{EventId, EventStatus};
use buzzboard_core::filter::StatusFilter;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "buzzboard")]
#[command(about = "Manage your BuzzBoard events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally narrowed by search text and status
    List {
        /// Match against event names and locations
        #[arg(short, long)]
        search: Option<String>,

        /// Show only one status ("upcoming", "ongoing", "completed", "tba"), or "all"
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Print the visible events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new event (prompts for anything not given as a flag)
    Add {
        #[arg(long)]
        name: Option<String>,

        /// Event date ("2025-12-01", "tomorrow", "next friday")
        #[arg(long)]
        date: Option<String>,

        /// Start time ("14:00")
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Headcount limit; leave blank for unlimited
        #[arg(long)]
        capacity: Option<String>,

        #[arg(long)]
        status: Option<EventStatus>,
    },
    /// Edit an event's fields
    Edit {
        id: EventId,
    },
    /// Delete an event after confirmation
    Delete {
        id: EventId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Advance an event's status one step along the cycle
    Advance {
        id: EventId,
    },
    /// Show the dashboard counts
    Stats,
    /// Validate credentials and open the matching dashboard
    Login {
        #[command(subcommand)]
        role: LoginRole,
    },
}

#[derive(Subcommand)]
enum LoginRole {
    /// Log in with your roll number
    Student {
        roll_number: Option<String>,

        #[arg(long)]
        remember_me: bool,
    },
    /// Log in with your admin email and club code
    Admin {
        email: Option<String>,

        #[arg(long)]
        club_code: Option<String>,

        #[arg(long)]
        remember_me: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { search, status, json } => commands::list::run(search, status, json),
        Commands::Add {
            name,
            date,
            time,
            location,
            description,
            capacity,
            status,
        } => commands::add::run(name, date, time, location, description, capacity, status),
        Commands::Edit { id } => commands::edit::run(id),
        Commands::Delete { id, force } => commands::delete::run(id, force),
        Commands::Advance { id } => commands::advance::run(id),
        Commands::Stats => commands::stats::run(),
        Commands::Login { role } => match role {
            LoginRole::Student {
                roll_number,
                remember_me,
            } => commands::login::student(roll_number, remember_me).await,
            LoginRole::Admin {
                email,
                club_code,
                remember_me,
            } => commands::login::admin(email, club_code, remember_me).await,
        },
    }
}
