use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "carescreen",
    version,
    about = "Caregiver stress screening and knowledge quiz scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding carescreen.toml and the data directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List assessments found in the assessments directory
    List,
    /// Score an answers file against an assessment
    Score(ScoreCommand),
    /// Start a session for a respondent
    Login(LoginCommand),
    /// End the current session
    Logout,
    /// Show the signed-in respondent
    Whoami,
    /// Show saved results for the signed-in respondent
    History(HistoryCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Assessment file (.toml/.json) or id from the assessments directory
    pub assessment: String,
    /// JSON object of question id to answer
    #[arg(long)]
    pub answers: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Persist the result for the signed-in respondent
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct LoginCommand {
    /// Falls back to respondent.default from config
    pub respondent: Option<String>,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
