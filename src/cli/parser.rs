use crate::export::ExportFormat;
use crate::models::{TaxonomyField, ViewMode};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAgenda
#[derive(Parser)]
#[command(
    name = "ragenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calendar appointments in the terminal: month/week/day/agenda views, configurable taxonomies and moderated status changes",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override appointment file path (YAML, or JSON by extension)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no configuration file is written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the appointment file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Rename legacy keys and add missing fields")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Show a calendar view
    View {
        #[arg(long, short, value_enum, default_value = "month")]
        mode: ViewMode,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Move the reference date by N views (negative: back)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,
    },

    /// Print the effective options of a taxonomy field
    Taxonomy {
        #[arg(long, value_enum, default_value = "statuses")]
        field: TaxonomyField,
    },

    /// Add an appointment
    Add {
        /// Unique appointment id
        id: String,

        /// Title shown in calendar cells
        title: String,

        /// Start timestamp (RFC 3339, e.g. 2025-09-01T09:00:00+02:00)
        #[arg(long = "start")]
        start: String,

        /// End timestamp (RFC 3339), must be after --start
        #[arg(long = "end")]
        end: String,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        participant: Option<String>,
    },

    /// Change the status of an appointment (subject to moderation)
    Status {
        /// Appointment id
        id: String,

        /// New status value
        value: String,

        /// Role of the user making the change (patient, staff, moderator, admin)
        #[arg(long)]
        role: Option<String>,

        /// Name recorded as moderator
        #[arg(long)]
        actor: Option<String>,
    },

    /// Export appointments in agenda order
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "YYYY-MM, YYYY-MM-DD or YYYY-MM-DD:YYYY-MM-DD"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
