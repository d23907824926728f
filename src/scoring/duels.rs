use super::normalize::Direction;
use super::{Measured, MetricSpec};
use crate::fields::{extract, Field};
use crate::types::record::StatRecord;

pub const GROUND_WEIGHT: f64 = 0.70;
pub const AERIAL_WEIGHT: f64 = 0.30;

pub const FIELDS: &[Field] = &[Field::GroundDuelPct, Field::AerialDuelPct];

pub fn specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            key: "ground_duels",
            weight: GROUND_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: ground,
        },
        MetricSpec {
            key: "aerial_duels",
            weight: AERIAL_WEIGHT,
            direction: Direction::HigherIsBetter,
            measure: aerial,
        },
    ]
}

fn ground(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::GroundDuelPct))
}

fn aerial(record: &StatRecord) -> Measured {
    Measured::Value(extract(record, Field::AerialDuelPct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::{approx, team};
    use crate::scoring::{score, ScorerKind};

    #[test]
    fn weights_sum_to_one() {
        assert!(approx(GROUND_WEIGHT + AERIAL_WEIGHT, 1.0));
    }

    #[test]
    fn three_team_ranking_locks_formula() {
        let records = vec![
            team("Low", &[("ground_duels_pct", 40.0), ("aerial_duels_pct", 30.0)]),
            team("Mid", &[("ground_duels_pct", 55.0), ("aerial_duels_pct", 30.0)]),
            team("High", &[("ground_duels_pct", 70.0), ("aerial_duels_pct", 90.0)]),
        ];

        let ranked = score(ScorerKind::Duels, &records, false);
        let order: Vec<&str> = ranked.iter().map(|entity| entity.name()).collect();
        assert_eq!(order, vec!["High", "Mid", "Low"]);

        let high = &ranked[0];
        assert!(approx(high.metric("ground_duels").map(|m| m.score).unwrap_or_default(), 100.0));
        assert!(approx(high.metric("aerial_duels").map(|m| m.score).unwrap_or_default(), 100.0));
        assert!(approx(high.composite, 100.0));

        let mid = &ranked[1];
        assert!(approx(mid.metric("ground_duels").map(|m| m.score).unwrap_or_default(), 50.5));
        assert!(approx(mid.metric("aerial_duels").map(|m| m.score).unwrap_or_default(), 1.0));
        assert!(approx(mid.composite, 35.65));
        assert_eq!(mid.rank, 2);

        let low = &ranked[2];
        assert!(approx(low.composite, 1.0));
        assert_eq!(low.rank, 3);
    }

    #[test]
    fn descriptive_headers_score_the_same() {
        let descriptive = |name: &str, ground: f64, aerial: f64| {
            let mut record = team(name, &[]);
            record.schema = crate::types::record::SchemaKind::Descriptive;
            record
                .with_value("Ground duels won %", ground)
                .with_value("Aerial duels won %", aerial)
        };
        let ranked = score(
            ScorerKind::Duels,
            &[descriptive("A", 45.0, 60.0), descriptive("B", 50.0, 40.0)],
            false,
        );
        assert_eq!(ranked[0].name(), "B");
        assert!(approx(ranked[0].composite, 70.0 + 0.3));
    }
}
