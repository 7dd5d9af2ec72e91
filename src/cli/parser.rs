use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for momo
/// CLI application to record, check and evaluate daily working hours
#[derive(Parser)]
#[command(
    name = "momo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Records, checks and evaluates daily working hours.",
    long_about = None
)]
pub struct Cli {
    /// Alternative home directory (default: ~/.momo)
    #[arg(global = true, short = 'H', long = "alt-home", value_name = "ALT_HOME_DIR")]
    pub alt_home: Option<String>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Pretend the current local time is this instant (used by tests)
    #[arg(global = true, long = "now", hide = true, value_name = "YYYY-MM-DD HH:MM")]
    pub now: Option<String>,

    /// Without a subcommand the report for the current month is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record the current time (starts or stops the time tracking)
    Track,

    /// List the recorded days of a month
    List {
        #[arg(
            long,
            short,
            value_name = "YYYY-MM",
            help = "Month to list (default: current month)"
        )]
        month: Option<String>,
    },

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
}
