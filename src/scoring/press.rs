use super::normalize::Direction;
use super::{Measured, MetricSpec};
use crate::fields::{extract, percentage, Field};
use crate::types::record::StatRecord;

pub const PPDA_WEIGHT: f64 = 0.30;
pub const BUILD_UP_TIME_WEIGHT: f64 = 0.10;
pub const LONG_BALL_WEIGHT: f64 = 0.10;
pub const RECOVERIES_WEIGHT: f64 = 0.20;
pub const PROGRESSION_WEIGHT: f64 = 0.30;

const PRESSING_FIELDS: &[Field] = &[
    Field::Ppda,
    Field::OpponentBuildUpTime,
    Field::OpponentLongBallPct,
    Field::RecoveriesOppHalf,
    Field::OpponentZoneStartSequences,
    Field::OpponentZoneEndSequences,
];

const PRESSED_FIELDS: &[Field] = &[
    Field::Ppda,
    Field::BuildUpTime,
    Field::LongBallPct,
    Field::RecoveriesOppHalf,
    Field::ZoneStartSequences,
    Field::ZoneEndSequences,
];

pub fn fields(opponent_analysis: bool) -> &'static [Field] {
    if opponent_analysis {
        PRESSED_FIELDS
    } else {
        PRESSING_FIELDS
    }
}

pub fn specs(opponent_analysis: bool) -> Vec<MetricSpec> {
    let pressing = [
        MetricSpec {
            key: "ppda",
            weight: PPDA_WEIGHT,
            direction: Direction::LowerIsBetter,
            measure: ppda,
        },
        MetricSpec {
            key: "build_up_time",
            weight: BUILD_UP_TIME_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: opponent_build_up_time,
        },
        MetricSpec {
            key: "long_ball_pct",
            weight: LONG_BALL_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: opponent_long_ball_pct,
        },
        MetricSpec {
            key: "recoveries_opp_half",
            weight: RECOVERIES_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: recoveries,
        },
        MetricSpec {
            key: "zone_progression_pct",
            weight: PROGRESSION_WEIGHT,
            direction: Direction::LowerIsBetter,
            measure: opponent_progression,
        },
    ];

    if !opponent_analysis {
        return pressing.to_vec();
    }

    pressing
        .iter()
        .map(|spec| MetricSpec {
            direction: spec.direction.flipped(),
            measure: match spec.key {
                "build_up_time" => own_build_up_time,
                "long_ball_pct" => own_long_ball_pct,
                "zone_progression_pct" => own_progression,
                _ => spec.measure,
            },
            ..*spec
        })
        .collect()
}

fn ppda(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::Ppda))
}

fn recoveries(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::RecoveriesOppHalf))
}

fn opponent_build_up_time(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::OpponentBuildUpTime))
}

fn own_build_up_time(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::BuildUpTime))
}

fn opponent_long_ball_pct(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::OpponentLongBallPct))
}

fn own_long_ball_pct(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::LongBallPct))
}

fn opponent_progression(record: &StatRecord) -> Measured {
    Measured::Value(percentage(
        extract(record, Field::OpponentZoneEndSequences),
        extract(record, Field::OpponentZoneStartSequences),
    ))
}

fn own_progression(record: &StatRecord) -> Measured {
    Measured::Value(percentage(
        extract(record, Field::ZoneEndSequences),
        extract(record, Field::ZoneStartSequences),
    ))
}
