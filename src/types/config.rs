use crate::error::ClubStatsError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubConfig {
    #[serde(default)]
    pub club: ClubSection,
    pub identities: Option<IdentitiesConfig>,
    #[serde(default)]
    pub benchmarks: BTreeMap<String, BenchmarkRange>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubSection {
    pub name: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentitiesConfig {
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BenchmarkRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub decimals: Option<usize>,
    pub top: Option<usize>,
}

impl ClubConfig {
    pub const DEFAULT_DECIMALS: usize = 2;

    pub fn decimals(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.decimals)
            .unwrap_or(Self::DEFAULT_DECIMALS)
    }

    pub fn top(&self) -> Option<usize> {
        self.report.as_ref().and_then(|report| report.top)
    }

    pub fn aliases(&self) -> BTreeMap<String, Vec<String>> {
        self.identities
            .as_ref()
            .map(|identities| identities.aliases.clone())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ClubStatsError> {
        for (name, range) in &self.benchmarks {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ClubStatsError::ConfigParse(format!(
                    "benchmarks.{name} must use finite bounds"
                )));
            }
            if range.min > range.max {
                return Err(ClubStatsError::ConfigParse(format!(
                    "benchmarks.{name} has min {} above max {}",
                    range.min, range.max
                )));
            }
            if !(0.0..=100.0).contains(&range.min) || !(0.0..=100.0).contains(&range.max) {
                return Err(ClubStatsError::ConfigParse(format!(
                    "benchmarks.{name} must stay within 0.0 and 100.0"
                )));
            }
        }

        if let Some(identities) = &self.identities {
            validate_alias_table(&identities.aliases)?;
        }

        if let Some(report) = &self.report {
            if let Some(decimals) = report.decimals {
                if decimals > 6 {
                    return Err(ClubStatsError::ConfigParse(
                        "report.decimals must be at most 6".to_string(),
                    ));
                }
            }
            if report.top == Some(0) {
                return Err(ClubStatsError::ConfigParse(
                    "report.top must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_alias_table(aliases: &BTreeMap<String, Vec<String>>) -> Result<(), ClubStatsError> {
    let mut claimed = HashMap::<String, &str>::new();
    for (canonical, variants) in aliases {
        if canonical.trim().is_empty() {
            return Err(ClubStatsError::ConfigParse(
                "identities.aliases keys must be non-empty names".to_string(),
            ));
        }
        for variant in variants {
            let key = crate::identity::normalize_identity(variant);
            if key.is_empty() {
                return Err(ClubStatsError::ConfigParse(format!(
                    "identities.aliases.{canonical} entries must be non-empty names"
                )));
            }
            match claimed.get(&key) {
                Some(owner) if *owner != canonical.as_str() => {
                    return Err(ClubStatsError::ConfigParse(format!(
                        "alias '{variant}' cannot belong to both '{owner}' and '{canonical}'"
                    )));
                }
                _ => {
                    claimed.insert(key, canonical.as_str());
                }
            }
        }
    }
    Ok(())
}
