use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use reqlens::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reqlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Requirement-quality review assistant", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a requirement and print a quality report
    Analyze {
        /// Read the requirement from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Agent mode: clarifying questions, your answers, improved report
    Agent {
        /// Read the requirement from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Validate a saved report file against the report schema
    Check {
        /// Report file (defaults to the configured report path)
        report: Option<PathBuf>,
    },

    /// Write a default reqlens.toml to the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { file } => {
            reqlens::cli::analyze::run(file.as_deref()).await?;
        }

        Commands::Agent { file } => {
            reqlens::cli::agent::run(file.as_deref()).await?;
        }

        Commands::Check { report } => {
            reqlens::cli::check::run(report.as_deref())?;
        }

        Commands::Init { force } => {
            reqlens::cli::init::run(force)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "reqlens", &mut io::stdout());
        }
    }

    Ok(())
}
