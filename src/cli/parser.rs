use clap::{Parser, Subcommand};

/// Command-line interface definition for journal
/// CLI application to keep track of interruptions with SQLite
#[derive(Parser)]
#[command(
    name = "journal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Journal of interruptions: log who interrupted you, for how long and why",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

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

    /// Log an interruption
    #[command(override_usage = "journal log <NAME> <DURATION> <REASON>")]
    Log {
        /// Person who interrupted you (at most 20 characters are kept)
        name: String,

        /// Duration in minutes
        #[arg(allow_hyphen_values = true)]
        duration: String,

        /// Reason for the interruption (at most 120 characters are kept)
        reason: String,
    },

    /// List logged entries
    List {
        /// Ignored
        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Show total interruption time in minutes
    Total {
        /// Ignored
        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Show interruptions per person sorted by duration
    Hitlist {
        /// Ignored
        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Print the internal audit log
    Audit,

    /// Database information and maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
