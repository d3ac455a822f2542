mod commands;
mod render;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lunar_birthday_core::input::{BATCH_FORMAT_HELP, Prompter};
use settings::Settings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lunar-birthday", version)]
#[command(about = "Generate lunar birthday calendars (.ics) from solar birth dates")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/lunar-birthday/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the .ics files are written to
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Domain used in event UIDs
    #[arg(long, global = true)]
    uid_domain: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter one person at the prompt
    Interactive,
    /// Generate a calendar for every line of a batch file
    Batch {
        /// Comma separated file, one person per line
        file: PathBuf,
    },
    /// Show the batch file format
    Format,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(
        cli.config.as_deref(),
        cli.output_dir,
        cli.uid_domain.as_deref(),
    )?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match cli.command {
        Some(Commands::Interactive) => commands::interactive::run(&settings, &mut prompter),
        Some(Commands::Batch { file }) => {
            commands::batch::run(&settings, &file, prompter.output()).map(|_| ())
        }
        Some(Commands::Format) => {
            println!("{}", BATCH_FORMAT_HELP);
            Ok(())
        }
        None => commands::menu::run(&settings, &mut prompter),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
