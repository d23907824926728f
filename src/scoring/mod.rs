pub mod assist_zone;
pub mod corners;
pub mod duels;
pub mod normalize;
pub mod press;
pub mod rank;
pub mod shots;

use crate::fields::Field;
use crate::types::record::StatRecord;
use crate::types::scoring::{MetricScore, Score, ScoredEntity};
use normalize::{normalize, Direction};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measured {
    Value(f64),
    /// The metric is undefined for this entity (zero denominator); it is left
    /// out of the min/max and receives `score` directly.
    Pinned { display: f64, score: Score },
}

impl Measured {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Pinned { .. } => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct MetricSpec {
    pub key: &'static str,
    pub weight: f64,
    pub direction: Direction,
    pub measure: fn(&StatRecord) -> Measured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Press,
    Duels,
    AssistZone,
    ShotLocation,
    ShotQuality,
    CornerAttack,
    CornerDefense,
}

impl ScorerKind {
    #[cfg(test)]
    pub const ALL: [ScorerKind; 7] = [
        ScorerKind::Press,
        ScorerKind::Duels,
        ScorerKind::AssistZone,
        ScorerKind::ShotLocation,
        ScorerKind::ShotQuality,
        ScorerKind::CornerAttack,
        ScorerKind::CornerDefense,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Press => "Press",
            Self::Duels => "Duels",
            Self::AssistZone => "Assist zone",
            Self::ShotLocation => "Shot location",
            Self::ShotQuality => "Shot quality",
            Self::CornerAttack => "Corner attack",
            Self::CornerDefense => "Corner defense",
        }
    }

    pub fn specs(self, opponent_analysis: bool) -> Vec<MetricSpec> {
        match self {
            Self::Press => press::specs(opponent_analysis),
            Self::Duels => duels::specs(),
            Self::AssistZone => assist_zone::specs(),
            Self::ShotLocation => shots::location_specs(),
            Self::ShotQuality => shots::quality_specs(),
            Self::CornerAttack => corners::attack_specs(),
            Self::CornerDefense => corners::defense_specs(),
        }
    }

    pub fn required_fields(self, opponent_analysis: bool) -> &'static [Field] {
        match self {
            Self::Press => press::fields(opponent_analysis),
            Self::Duels => duels::FIELDS,
            Self::AssistZone => assist_zone::FIELDS,
            Self::ShotLocation => shots::LOCATION_FIELDS,
            Self::ShotQuality => shots::QUALITY_FIELDS,
            Self::CornerAttack => corners::ATTACK_FIELDS,
            Self::CornerDefense => corners::DEFENSE_FIELDS,
        }
    }
}

pub fn score(kind: ScorerKind, records: &[StatRecord], opponent_analysis: bool) -> Vec<ScoredEntity> {
    debug!(
        scorer = kind.title(),
        entities = records.len(),
        opponent_analysis,
        "scoring"
    );
    score_with(records, &kind.specs(opponent_analysis))
}

pub fn score_with(records: &[StatRecord], specs: &[MetricSpec]) -> Vec<ScoredEntity> {
    let measured: Vec<Vec<Measured>> = specs
        .iter()
        .map(|spec| records.iter().map(spec.measure).collect())
        .collect();
    // Pinned entities stay out of their metric's min/max.
    let peers: Vec<Vec<f64>> = measured
        .iter()
        .map(|column| column.iter().filter_map(Measured::value).collect())
        .collect();

    let entities = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let metrics: Vec<MetricScore> = specs
                .iter()
                .enumerate()
                .map(|(column, spec)| {
                    let (raw, score) = match measured[column][row] {
                        Measured::Value(value) => {
                            (value, normalize(value, &peers[column], spec.direction))
                        }
                        Measured::Pinned { display, score } => (display, score),
                    };
                    MetricScore {
                        key: spec.key,
                        raw,
                        score,
                    }
                })
                .collect();
            let composite = specs
                .iter()
                .zip(&metrics)
                .map(|(spec, metric)| spec.weight * metric.score)
                .sum();
            ScoredEntity {
                record: record.clone(),
                metrics,
                composite,
                rank: 0,
            }
        })
        .collect();

    rank::rank_descending(entities)
}
