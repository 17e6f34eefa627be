mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use vaultsweep_core::vault::ScanMode;

#[derive(Debug, Parser)]
#[command(name = "vsw", version, about = "Find and clear unused attachments in markdown vaults")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List unused attachments without touching anything
    Scan(ScanArgs),

    /// Delete unused attachments (vault trash unless configured otherwise)
    Clean(CleanArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Only files with a known image extension
    Image,
    /// Every non-document file
    All,
}

impl From<ModeArg> for ScanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Image => ScanMode::Image,
            ModeArg::All => ScanMode::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Which attachments to consider
    #[arg(long, value_enum, default_value_t = ModeArg::Image)]
    pub mode: ModeArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Which attachments to consider
    #[arg(long, value_enum, default_value_t = ModeArg::Image)]
    pub mode: ModeArg,

    /// Delete permanently instead of moving to the vault trash
    #[arg(long)]
    pub permanent: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Scan(args) => cmd::scan::run(cli.config.as_deref(), cli.profile.as_deref(), args),
        Commands::Clean(args) => {
            cmd::clean::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
    }
}
