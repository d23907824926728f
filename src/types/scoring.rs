use crate::types::record::StatRecord;
use serde::Serialize;

pub type Score = f64;

pub const PINNED_WORST: Score = 0.0;
pub const PINNED_BEST: Score = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub key: &'static str,
    pub raw: f64,
    pub score: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntity {
    #[serde(flatten)]
    pub record: StatRecord,
    pub metrics: Vec<MetricScore>,
    pub composite: Score,
    pub rank: usize,
}

impl ScoredEntity {
    #[cfg(test)]
    pub fn metric(&self, key: &str) -> Option<&MetricScore> {
        self.metrics.iter().find(|metric| metric.key == key)
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }
}
