use super::normalize::Direction;
use super::{Measured, MetricSpec};
use crate::fields::{extract, ratio, Field};
use crate::types::record::StatRecord;
use crate::types::scoring::{Score, PINNED_BEST, PINNED_WORST};

pub const ATTACK_XG_WEIGHT: f64 = 0.50;
pub const ATTACK_CONVERSION_WEIGHT: f64 = 0.50;
pub const DEFENSE_XG_WEIGHT: f64 = 0.50;
pub const DEFENSE_CONVERSION_WEIGHT: f64 = 0.50;
pub const SUMMARY_ATTACK_WEIGHT: f64 = 0.50;
pub const SUMMARY_DEFENSE_WEIGHT: f64 = 0.50;

pub const ATTACK_FIELDS: &[Field] = &[
    Field::CornersFor,
    Field::XgFromCornersFor,
    Field::GoalsFromCornersFor,
];

pub const DEFENSE_FIELDS: &[Field] = &[
    Field::CornersAgainst,
    Field::XgFromCornersAgainst,
    Field::GoalsFromCornersAgainst,
];

pub fn attack_specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            key: "xg_per_corner",
            weight: ATTACK_XG_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: xg_per_corner,
        },
        MetricSpec {
            key: "corner_to_goal",
            weight: ATTACK_CONVERSION_WEIGHT,
            direction: Direction::LowerIsBetter,
            measure: corners_per_goal,
        },
    ]
}

pub fn defense_specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            key: "xg_conceded_per_corner",
            weight: DEFENSE_XG_WEIGHT,
            direction: Direction::LowerIsBetter,
            measure: xg_conceded_per_corner,
        },
        MetricSpec {
            key: "corner_to_goal_conceded",
            weight: DEFENSE_CONVERSION_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: corners_per_goal_conceded,
        },
    ]
}

pub fn summary_score(attack: Score, defense: Score) -> Score {
    SUMMARY_ATTACK_WEIGHT * attack + SUMMARY_DEFENSE_WEIGHT * defense
}

fn xg_per_corner(record: &StatRecord) -> Measured {
    Measured::Value(ratio(
        extract(record, Field::XgFromCornersFor),
        extract(record, Field::CornersFor),
    ))
}

fn corners_per_goal(record: &StatRecord) -> Measured {
    let goals = extract(record, Field::GoalsFromCornersFor);
    if goals == 0.0 {
        return Measured::Pinned {
            display: f64::INFINITY,
            score: PINNED_WORST,
        };
    }
    Measured::Value(extract(record, Field::CornersFor) / goals)
}

fn xg_conceded_per_corner(record: &StatRecord) -> Measured {
    Measured::Value(ratio(
        extract(record, Field::XgFromCornersAgainst),
        extract(record, Field::CornersAgainst),
    ))
}

fn corners_per_goal_conceded(record: &StatRecord) -> Measured {
    let goals = extract(record, Field::GoalsFromCornersAgainst);
    if goals == 0.0 {
        return Measured::Pinned {
            display: f64::INFINITY,
            score: PINNED_BEST,
        };
    }
    Measured::Value(extract(record, Field::CornersAgainst) / goals)
}
