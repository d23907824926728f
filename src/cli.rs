use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clubstats",
    version,
    about = "Football club analytics: team rankings, corner differentials and body-composition trends"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank teams from a stats export with one composite scorer
    Score(ScoreCommand),
    /// Join corner attack and defense exports into a combined ranking
    Corners(CornersCommand),
    /// Latest values, trends and benchmark distances from body measurements
    Body(BodyCommand),
    /// Report data-quality findings for a stats export
    Check(CheckCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScorerArg {
    Press,
    Duels,
    AssistZone,
    ShotLocation,
    ShotQuality,
    CornerAttack,
    CornerDefense,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MetricArg {
    Weight,
    BodyFat,
    LeanMass,
    FatMass,
    MuscleMass,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Value,
    Delta,
    Benchmark,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// CSV file or directory of CSV files
    pub path: PathBuf,
    #[arg(long, value_enum)]
    pub scorer: ScorerArg,
    /// Score from the opponent's point of view (press only)
    #[arg(long)]
    pub opponent: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Keep only the first N ranked rows
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct CornersCommand {
    #[arg(long)]
    pub attack: PathBuf,
    #[arg(long)]
    pub defense: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct BodyCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "body-fat")]
    pub metric: MetricArg,
    #[arg(long, value_enum, default_value = "value")]
    pub sort: SortArg,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    /// Also check that the columns this scorer reads are present
    #[arg(long, value_enum)]
    pub scorer: Option<ScorerArg>,
    #[arg(long)]
    pub opponent: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
}
