use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work log: record work sessions, then search, browse and edit them",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second log)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file read or written, no screen clearing)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a command the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the interactive menu
    Menu,

    /// Add a work session without the menu
    Add {
        #[arg(long, help = "Task name")]
        task: String,

        #[arg(long, help = "Minutes spent (greater than zero)")]
        minutes: u32,

        #[arg(long, default_value = "", help = "Free-text notes")]
        notes: String,

        #[arg(long, help = "Date in MM/DD/YYYY (default: today)")]
        date: Option<String>,
    },

    /// List sessions, optionally filtered
    List {
        #[arg(long, help = "Exact stored date (MM/DD/YYYY)")]
        date: Option<String>,

        #[arg(long, requires = "to", help = "Start of a date range (MM/DD/YYYY)")]
        from: Option<String>,

        #[arg(long, requires = "from", help = "End of a date range (MM/DD/YYYY)")]
        to: Option<String>,

        #[arg(long, help = "Case-insensitive regex on task name or notes")]
        grep: Option<String>,

        #[arg(long, help = "Case-insensitive phrase on task name or notes")]
        phrase: Option<String>,

        #[arg(long, help = "Lowest (or exact) minutes spent")]
        min: Option<u32>,

        #[arg(long, requires = "min", help = "Highest minutes spent")]
        max: Option<u32>,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the operation log
    Log {
        #[arg(long = "print", help = "Print the operation log")]
        print: bool,
    },
}
