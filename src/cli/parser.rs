use crate::export::ExportFormat;
use crate::models::ActivityType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkoutlog
/// Log running and cycling workouts on a map, stored in SQLite
#[derive(Parser)]
#[command(
    name = "rworkoutlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple workout logging CLI: pin running and cycling sessions on a map using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Current position as LAT,LNG (overrides `home_position`)
    #[arg(
        global = true,
        long = "at",
        value_name = "LAT,LNG",
        allow_hyphen_values = true
    )]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Click the map and submit the workout form
    Add {
        /// Map spot that was clicked
        #[arg(
            long = "click",
            value_name = "LAT,LNG",
            allow_hyphen_values = true,
            help = "Map location of the workout (LAT,LNG)"
        )]
        click: String,

        #[arg(
            long = "type",
            default_value = "running",
            value_parser = parse_activity,
            help = "Workout type: running (run, r) or cycling (cycle, c)"
        )]
        activity: ActivityType,

        /// Raw form values: validation happens on submit, like in the form
        #[arg(long, allow_hyphen_values = true, help = "Distance in km")]
        distance: String,

        #[arg(long, allow_hyphen_values = true, help = "Duration in minutes")]
        duration: String,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Cadence in steps/min (running)"
        )]
        cadence: Option<String>,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Elevation gain in meters (cycling)"
        )]
        elevation: Option<String>,
    },

    /// List stored workouts, newest first
    List {
        #[arg(long = "html", help = "Print the rendered list entries instead of a table")]
        html: bool,
    },

    /// Click a list entry: move the map to that workout
    Show {
        /// Workout id
        id: String,
    },

    /// Print the map: view, tiles and markers
    Map,

    /// Delete every stored workout
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export workouts
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn parse_activity(s: &str) -> Result<ActivityType, String> {
    s.parse::<ActivityType>().map_err(|e| e.to_string())
}
