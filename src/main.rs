mod check;
mod cli;
mod config;
mod differential;
mod error;
mod fields;
mod identity;
mod ingest;
mod report;
mod scoring;
mod trend;
mod types;

use crate::error::ClubStatsError;
use crate::identity::{AliasTable, IdentityResolver};
use crate::ingest::Dataset;
use crate::types::config::ClubConfig;
use crate::types::report::Report;
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

/// `RUST_LOG` wins; otherwise the level follows `-q` / `-v` / `-vv`.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_settings(input: &Path) -> Result<Option<ClubConfig>, ClubStatsError> {
    if !input.exists() {
        return Err(ClubStatsError::PathNotFound(input.display().to_string()));
    }
    let root = ingest::files::config_root(input);
    let loaded = config::load_config(&root)?;
    if loaded.is_none() {
        warn!(
            "no {} found in {}; using defaults",
            config::DEFAULT_CONFIG_FILE,
            root.display()
        );
    }
    Ok(loaded)
}

fn require_rows<T>(dataset: &Dataset<T>, path: &Path) -> Result<(), ClubStatsError> {
    if dataset.is_empty() {
        return Err(ClubStatsError::EmptyDataset(path.display().to_string()));
    }
    Ok(())
}

fn stamp(report: &mut Report, config: Option<&ClubConfig>, digest: String) {
    if let Some(cfg) = config {
        report.club = cfg.club.name.clone();
        report.season = cfg.club.season.clone();
    }
    report.source_digest = Some(digest);
}

fn resolver_for(config: Option<&ClubConfig>) -> IdentityResolver {
    config
        .map(|cfg| IdentityResolver::new(AliasTable::from_config(&cfg.aliases())))
        .unwrap_or_default()
}

fn emit(
    table: &Report,
    format: cli::ReportFormat,
    config: Option<&ClubConfig>,
) -> Result<(), ClubStatsError> {
    let output_format = match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Csv => report::OutputFormat::Csv,
    };
    let decimals = config
        .map(ClubConfig::decimals)
        .unwrap_or(ClubConfig::DEFAULT_DECIMALS);
    let rendered = report::render(table, output_format, decimals)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn scorer_kind(arg: cli::ScorerArg) -> scoring::ScorerKind {
    match arg {
        cli::ScorerArg::Press => scoring::ScorerKind::Press,
        cli::ScorerArg::Duels => scoring::ScorerKind::Duels,
        cli::ScorerArg::AssistZone => scoring::ScorerKind::AssistZone,
        cli::ScorerArg::ShotLocation => scoring::ScorerKind::ShotLocation,
        cli::ScorerArg::ShotQuality => scoring::ScorerKind::ShotQuality,
        cli::ScorerArg::CornerAttack => scoring::ScorerKind::CornerAttack,
        cli::ScorerArg::CornerDefense => scoring::ScorerKind::CornerDefense,
    }
}

fn config_exit_code(config: Option<&ClubConfig>) -> i32 {
    if config.is_some() {
        exit_code::SUCCESS
    } else {
        exit_code::WARNINGS
    }
}

fn run() -> Result<i32, ClubStatsError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = load_settings(&cmd.path)?;
            let dataset = ingest::load_team_stats(&cmd.path)?;
            require_rows(&dataset, &cmd.path)?;

            let kind = scorer_kind(cmd.scorer);
            if cmd.opponent && kind != scoring::ScorerKind::Press {
                warn!(scorer = kind.title(), "--opponent only changes the press scorer");
            }
            let mut entities = scoring::score(kind, &dataset.items, cmd.opponent);
            let top = cmd.top.or_else(|| loaded.as_ref().and_then(ClubConfig::top));
            report::tables::truncate_top(&mut entities, top);
            info!(
                scorer = kind.title(),
                files = dataset.sources.len(),
                rows = entities.len(),
                "ranked"
            );

            let mut table = report::tables::score_table(kind, cmd.opponent, &entities);
            stamp(&mut table, loaded.as_ref(), dataset.digest);
            emit(&table, cmd.format, loaded.as_ref())?;
            Ok(config_exit_code(loaded.as_ref()))
        }
        cli::Commands::Corners(cmd) => {
            let loaded = load_settings(&cmd.attack)?;
            let attack = ingest::load_team_stats(&cmd.attack)?;
            require_rows(&attack, &cmd.attack)?;
            let defense = ingest::load_team_stats(&cmd.defense)?;
            require_rows(&defense, &cmd.defense)?;

            let resolver = resolver_for(loaded.as_ref());
            let attack_scores = scoring::score(scoring::ScorerKind::CornerAttack, &attack.items, false);
            let defense_scores =
                scoring::score(scoring::ScorerKind::CornerDefense, &defense.items, false);
            let mut rows = differential::corner_summary(&attack_scores, &defense_scores, &resolver);
            let top = cmd.top.or_else(|| loaded.as_ref().and_then(ClubConfig::top));
            report::tables::truncate_top(&mut rows, top);

            let mut table = report::tables::corner_summary_table(&rows);
            if resolver.has_declared_identities() {
                let names = attack
                    .items
                    .iter()
                    .chain(&defense.items)
                    .map(types::record::StatRecord::name);
                table
                    .notes
                    .extend(report::tables::unresolved_note(&resolver.unresolved(names)));
            }
            let unmatched = rows.iter().filter(|row| row.diffs.is_none()).count();
            if unmatched > 0 {
                table.notes.push(format!(
                    "{unmatched} attack row(s) had no defense partner; their defense score counts as 0"
                ));
            }
            stamp(
                &mut table,
                loaded.as_ref(),
                format!("{}+{}", attack.digest, defense.digest),
            );
            emit(&table, cmd.format, loaded.as_ref())?;
            Ok(config_exit_code(loaded.as_ref()))
        }
        cli::Commands::Body(cmd) => {
            let loaded = load_settings(&cmd.path)?;
            let dataset = ingest::load_measurements(&cmd.path)?;
            require_rows(&dataset, &cmd.path)?;

            let metric = match cmd.metric {
                cli::MetricArg::Weight => trend::BodyMetric::Weight,
                cli::MetricArg::BodyFat => trend::BodyMetric::BodyFat,
                cli::MetricArg::LeanMass => trend::BodyMetric::LeanMass,
                cli::MetricArg::FatMass => trend::BodyMetric::FatMass,
                cli::MetricArg::MuscleMass => trend::BodyMetric::MuscleMass,
            };
            let sort = match cmd.sort {
                cli::SortArg::Value => trend::BodySort::Value,
                cli::SortArg::Delta => trend::BodySort::Delta,
                cli::SortArg::Benchmark => trend::BodySort::Benchmark,
            };

            let benchmarks = loaded
                .as_ref()
                .map(trend::BenchmarkTable::from_config)
                .unwrap_or_default();
            let series = trend::MeasurementSeries::group(dataset.items, benchmarks.resolver());
            let mut rows = trend::body_rows(&series, metric, &benchmarks);
            trend::sort_rows(&mut rows, sort);

            let mut table = report::tables::body_table(metric, &rows);
            if benchmarks.resolver().has_declared_identities() {
                let unresolved = benchmarks
                    .resolver()
                    .unresolved(series.iter().map(|series| series.identity.as_str()));
                table
                    .notes
                    .extend(report::tables::unresolved_note(&unresolved));
            }
            stamp(&mut table, loaded.as_ref(), dataset.digest);
            emit(&table, cmd.format, loaded.as_ref())?;
            Ok(config_exit_code(loaded.as_ref()))
        }
        cli::Commands::Check(cmd) => {
            let loaded = load_settings(&cmd.path)?;
            let dataset = ingest::load_team_stats(&cmd.path)?;
            let resolver = resolver_for(loaded.as_ref());
            let source = cmd.path.display().to_string();
            let findings = check::check_findings(&check::CheckInput {
                records: &dataset.items,
                source: &source,
                scorer: cmd.scorer.map(scorer_kind),
                opponent_analysis: cmd.opponent,
                resolver: &resolver,
            });

            let mut table = report::tables::findings_table(&source, &findings);
            stamp(&mut table, loaded.as_ref(), dataset.digest);
            emit(&table, cmd.format, loaded.as_ref())?;

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else if loaded.is_none() || !findings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
