pub mod csv;
pub mod json;
pub mod md;
pub mod tables;

use crate::error::{ClubStatsError, Result};
use crate::types::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
}

pub fn render(report: &Report, format: OutputFormat, decimals: usize) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ClubStatsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, decimals)),
        OutputFormat::Csv => self::csv::to_csv(report, decimals).map_err(|source| {
            ClubStatsError::Csv {
                path: "<output>".to_string(),
                source,
            }
        }),
    }
}
