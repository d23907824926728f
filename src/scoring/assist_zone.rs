use super::normalize::Direction;
use super::{Measured, MetricSpec};
use crate::fields::{extract, Field};
use crate::types::record::StatRecord;
use crate::types::scoring::PINNED_WORST;

pub const ASSISTS_WEIGHT: f64 = 0.40;
pub const GOLDEN_ZONE_WEIGHT: f64 = 0.20;
pub const CROSS_RATIO_WEIGHT: f64 = 0.40;

pub const FIELDS: &[Field] = &[
    Field::AssistsFromPass,
    Field::GoldenZoneShots,
    Field::OpenPlayCrosses,
];

pub fn specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            key: "assists_from_pass",
            weight: ASSISTS_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: assists,
        },
        MetricSpec {
            key: "golden_zone_shots",
            weight: GOLDEN_ZONE_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: golden_zone_shots,
        },
        MetricSpec {
            key: "cross_to_pass_ratio",
            weight: CROSS_RATIO_WEIGHT,
            direction: Direction::LowerIsBetter,
            measure: cross_to_pass_ratio,
        },
    ]
}

fn assists(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::AssistsFromPass))
}

fn golden_zone_shots(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::GoldenZoneShots))
}

fn cross_to_pass_ratio(record: &StatRecord) -> Measured {
    let assists = extract(record, Field::AssistsFromPass);
    if assists == 0.0 {
        return Measured::Pinned {
            display: f64::INFINITY,
            score: PINNED_WORST,
        };
    }
    Measured::Value(extract(record, Field::OpenPlayCrosses) / assists)
}
