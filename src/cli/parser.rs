use clap::{Parser, Subcommand};

/// Command-line interface definition for fieldaid
/// Operator console for field repair technicians
#[derive(Parser)]
#[command(
    name = "fieldaid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Field repair operator console: job timer with location logging plus Ohm's law and HVAC sensible heat calculators",
    long_about = None
)]
pub struct Cli {
    /// Override job history path (useful for tests or custom logs)
    #[arg(global = true, long = "history")]
    pub history: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive operator console (default when no subcommand is given)
    Console,

    /// Initialize the configuration directory and file
    Init,

    /// Print recent rows from the job history
    Log {
        #[arg(long = "tail", default_value_t = 5, help = "Number of rows to show")]
        tail: usize,

        #[arg(long = "all", help = "Show every row instead of the most recent")]
        all: bool,

        #[arg(long = "json", help = "Print rows as a JSON array")]
        json: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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
}
