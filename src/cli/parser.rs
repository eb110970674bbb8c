use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
/// CLI application to turn time-clock CSV exports into per-agent daily schedules
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timecard CLI: group time-clock events by agent and day and show shift windows",
    long_about = None
)]
pub struct Cli {
    /// Input file with the time-clock export (reads stdin when omitted or "-")
    #[arg(global = true, long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the agents found in the input, in order of first appearance
    Agents,

    /// Show the per-day schedule and activities of one agent
    Show {
        /// Agent identifier as it appears in the `Agent` column
        #[arg(long, short = 'a', value_name = "AGENT")]
        agent: String,
    },

    /// Export grouped entries in various formats
    Export {
        /// Export format: csv, json
        #[arg(long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to a single agent
        #[arg(long, short = 'a', value_name = "AGENT")]
        agent: Option<String>,

        /// Overwrite output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}
