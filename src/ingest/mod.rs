pub mod files;
pub mod measurements;
pub mod rows;

use crate::error::{ClubStatsError, Result};
use crate::trend::Measurement;
use crate::types::record::StatRecord;
use files::{list_csv_files, SourceDigest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Dataset<T> {
    pub items: Vec<T>,
    pub sources: Vec<PathBuf>,
    pub digest: String,
}

impl<T> Dataset<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn load_team_stats(path: &Path) -> Result<Dataset<StatRecord>> {
    load_with(path, |bytes| rows::load_records_from_reader(bytes))
}

pub fn load_measurements(path: &Path) -> Result<Dataset<Measurement>> {
    load_with(path, |bytes| measurements::load_measurements_from_reader(bytes))
}

fn load_with<T>(
    path: &Path,
    parse: impl Fn(&[u8]) -> std::result::Result<Vec<T>, csv::Error>,
) -> Result<Dataset<T>> {
    if !path.exists() {
        return Err(ClubStatsError::PathNotFound(path.display().to_string()));
    }

    let sources = list_csv_files(path);
    let mut digest = SourceDigest::default();
    let mut items = Vec::new();
    for source in &sources {
        let bytes = fs::read(source)?;
        digest.update(&bytes);
        let parsed = parse(&bytes).map_err(|source_err| ClubStatsError::Csv {
            path: source.display().to_string(),
            source: source_err,
        })?;
        debug!(file = %source.display(), rows = parsed.len(), "parsed csv");
        items.extend(parsed);
    }

    info!(
        path = %path.display(),
        files = sources.len(),
        rows = items.len(),
        "loaded dataset"
    );
    Ok(Dataset {
        items,
        sources,
        digest: digest.finish(),
    })
}
