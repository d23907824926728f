use super::normalize::Direction;
use super::{Measured, MetricSpec};
use crate::fields::{extract, percentage, Field};
use crate::types::record::StatRecord;

pub const LOCATION_WEIGHT: f64 = 1.00;
pub const QUALITY_WEIGHT: f64 = 1.00;

pub const LOCATION_FIELDS: &[Field] = &[Field::GoldenZoneShots, Field::TotalShots];
pub const QUALITY_FIELDS: &[Field] = &[Field::BoxShotsOnTarget, Field::TotalShots];

pub fn location_specs() -> Vec<MetricSpec> {
    vec![MetricSpec {
        key: "golden_zone_shot_pct",
        weight: LOCATION_WEIGHT,
        direction: Direction::HigherIsBetter,
        measure: golden_zone_share,
    }]
}

pub fn quality_specs() -> Vec<MetricSpec> {
    vec![MetricSpec {
        key: "box_on_target_pct",
        weight: QUALITY_WEIGHT,
        direction: Direction::HigherIsBetter,
        measure: box_on_target_share,
    }]
}

fn golden_zone_share(record: &StatRecord) -> Measured {
    Measured::Value(percentage(
        extract(record, Field::GoldenZoneShots),
        extract(record, Field::TotalShots),
    ))
}

fn box_on_target_share(record: &StatRecord) -> Measured {
    Measured::Value(percentage(
        extract(record, Field::BoxShotsOnTarget),
        extract(record, Field::TotalShots),
    ))
}
