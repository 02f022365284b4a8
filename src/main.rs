//! tabshell CLI
//!
//! Launch the terminal tab shell, or print its tab registry.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tabshell::logging;
use tabshell::report::{format_tabs, OutputFormat};
use tabshell::tab::registry;
use tabshell::tui::run::run;

#[derive(Parser)]
#[command(name = "tabshell")]
#[command(about = "Terminal tab-bar shell with five placeholder screens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for log files (default: user cache directory)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive tab shell (default)
    Run,

    /// Print the tab registry and exit
    Tabs {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(cli.log_dir),
        Commands::Tabs { format } => cmd_tabs(format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_run(log_dir: Option<PathBuf>) -> Result<(), String> {
    let _logging = logging::init(log_dir.as_deref());
    run().map_err(|e| format!("terminal: {}", e))
}

fn cmd_tabs(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_tabs(&registry(), format));
    Ok(())
}
