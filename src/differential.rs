use crate::fields::{extract, Field};
use crate::identity::IdentityResolver;
use crate::scoring::corners::summary_score;
use crate::scoring::rank::{rank_descending, Ranked};
use crate::types::record::{DisplayMeta, EntityId};
use crate::types::scoring::{Score, ScoredEntity};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerDiffs {
    pub corners: f64,
    pub shots: f64,
    pub goals: f64,
    pub xg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CornerSummaryRow {
    #[serde(flatten)]
    pub id: EntityId,
    #[serde(flatten)]
    pub meta: DisplayMeta,
    pub attack_score: Score,
    /// `None` when the defense view has no record for this team.
    pub defense_score: Option<Score>,
    pub combined: Score,
    pub diffs: Option<CornerDiffs>,
    pub rank: usize,
}

impl Ranked for CornerSummaryRow {
    fn ranking_score(&self) -> f64 {
        self.combined
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

pub fn corner_summary(
    attack: &[ScoredEntity],
    defense: &[ScoredEntity],
    resolver: &IdentityResolver,
) -> Vec<CornerSummaryRow> {
    let mut by_id = HashMap::new();
    let mut by_name = HashMap::new();
    let mut by_name_without_id = HashMap::new();
    for (index, entity) in defense.iter().enumerate() {
        let key = resolver.resolve(entity.name()).key().to_string();
        match &entity.record.id.team_id {
            Some(team_id) => {
                by_id.entry(team_id.as_str()).or_insert(index);
            }
            None => {
                by_name_without_id.entry(key.clone()).or_insert(index);
            }
        }
        by_name.entry(key).or_insert(index);
    }

    let mut used = vec![false; defense.len()];
    let rows = attack
        .iter()
        .map(|entity| {
            let key = resolver.resolve(entity.name()).key().to_string();
            let partner = match entity.record.id.team_id.as_deref() {
                Some(team_id) => by_id
                    .get(team_id)
                    .or_else(|| by_name_without_id.get(&key)),
                None => by_name.get(&key),
            }
            .copied();
            if let Some(index) = partner {
                used[index] = true;
            }
            build_row(entity, partner.map(|index| &defense[index]))
        })
        .collect();

    for (entity, _) in defense.iter().zip(&used).filter(|(_, used)| !**used) {
        debug!(team = entity.name(), "defense record has no attack partner");
    }

    rank_descending(rows)
}

fn build_row(attack: &ScoredEntity, defense: Option<&ScoredEntity>) -> CornerSummaryRow {
    let defense_score = defense.map(|entity| entity.composite);
    let diffs = defense.map(|entity| {
        let ours = &attack.record;
        let theirs = &entity.record;
        CornerDiffs {
            corners: extract(ours, Field::CornersFor) - extract(theirs, Field::CornersAgainst),
            shots: extract(ours, Field::ShotsFromCornersFor)
                - extract(theirs, Field::ShotsFromCornersAgainst),
            goals: extract(ours, Field::GoalsFromCornersFor)
                - extract(theirs, Field::GoalsFromCornersAgainst),
            xg: extract(ours, Field::XgFromCornersFor)
                - extract(theirs, Field::XgFromCornersAgainst),
        }
    });
    CornerSummaryRow {
        id: attack.record.id.clone(),
        meta: attack.record.meta.clone(),
        attack_score: attack.composite,
        defense_score,
        combined: summary_score(attack.composite, defense_score.unwrap_or(0.0)),
        diffs,
        rank: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::{approx, team};
    use crate::scoring::{score, ScorerKind};

    fn attack_view() -> Vec<ScoredEntity> {
        let mut with_id = team(
            "Maccabi North",
            &[("corners", 30.0), ("shots_corners", 9.0), ("goals_corners", 3.0), ("xG_corners", 2.4)],
        );
        with_id.id.team_id = Some("17".to_string());
        let records = vec![
            with_id,
            team(
                "Beitar Sur",
                &[("corners", 20.0), ("shots_corners", 4.0), ("goals_corners", 1.0), ("xG_corners", 0.8)],
            ),
            team("Lonely FC", &[("corners", 12.0), ("goals_corners", 2.0)]),
        ];
        score(ScorerKind::CornerAttack, &records, false)
    }

    fn defense_view() -> Vec<ScoredEntity> {
        let mut with_id = team(
            "Maccabi N.",
            &[("corners", 25.0), ("shots_corners", 6.0), ("goals_corners", 1.0), ("xG_corners", 1.5)],
        );
        with_id.id.team_id = Some("17".to_string());
        let records = vec![
            with_id,
            team(
                "beitar  sur",
                &[("corners", 22.0), ("shots_corners", 7.0), ("goals_corners", 3.0), ("xG_corners", 2.0)],
            ),
            team("Unpaired", &[("corners", 10.0)]),
        ];
        score(ScorerKind::CornerDefense, &records, false)
    }

    fn row<'a>(rows: &'a [CornerSummaryRow], name: &str) -> &'a CornerSummaryRow {
        rows.iter()
            .find(|row| row.id.name == name)
            .expect("row should exist")
    }

    #[test]
    fn joins_by_team_id_before_name() {
        let rows = corner_summary(&attack_view(), &defense_view(), &IdentityResolver::default());
        let north = row(&rows, "Maccabi North");
        let diffs = north.diffs.expect("joined row should carry diffs");
        assert!(approx(diffs.corners, 5.0));
        assert!(approx(diffs.shots, 3.0));
        assert!(approx(diffs.goals, 2.0));
        assert!(approx(diffs.xg, 0.9));
    }

    #[test]
    fn falls_back_to_normalized_name() {
        let rows = corner_summary(&attack_view(), &defense_view(), &IdentityResolver::default());
        let sur = row(&rows, "Beitar Sur");
        let diffs = sur.diffs.expect("name match should join");
        assert!(approx(diffs.corners, -2.0));
        assert!(approx(diffs.goals, -2.0));
        assert!(sur.defense_score.is_some());
    }

    #[test]
    fn unmatched_attack_rows_omit_diffs() {
        let rows = corner_summary(&attack_view(), &defense_view(), &IdentityResolver::default());
        assert_eq!(rows.len(), 3);
        let lonely = row(&rows, "Lonely FC");
        assert!(lonely.diffs.is_none());
        assert!(lonely.defense_score.is_none());
        assert!(approx(lonely.combined, 0.5 * lonely.attack_score));
        assert!(rows.iter().all(|row| row.id.name != "Unpaired"));
    }

    #[test]
    fn differing_team_ids_never_join_by_name() {
        let mut ours = team("United", &[("corners", 18.0), ("goals_corners", 2.0)]);
        ours.id.team_id = Some("1".to_string());
        let mut theirs = team("United", &[("corners", 12.0), ("goals_corners", 1.0)]);
        theirs.id.team_id = Some("2".to_string());
        let attack = score(ScorerKind::CornerAttack, &[ours], false);
        let defense = score(ScorerKind::CornerDefense, &[theirs], false);

        let rows = corner_summary(&attack, &defense, &IdentityResolver::default());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].diffs.is_none());
        assert!(rows[0].defense_score.is_none());
    }

    #[test]
    fn id_less_defense_row_joins_keyed_attack_row_by_name() {
        let mut ours = team("United", &[("corners", 18.0), ("goals_corners", 2.0)]);
        ours.id.team_id = Some("1".to_string());
        let theirs = team("united", &[("corners", 12.0), ("goals_corners", 1.0)]);
        let attack = score(ScorerKind::CornerAttack, &[ours], false);
        let defense = score(ScorerKind::CornerDefense, &[theirs], false);

        let rows = corner_summary(&attack, &defense, &IdentityResolver::default());
        let diffs = rows[0].diffs.expect("name match should join");
        assert!(approx(diffs.corners, 6.0));
    }

    #[test]
    fn combined_rank_follows_half_and_half_score() {
        let rows = corner_summary(&attack_view(), &defense_view(), &IdentityResolver::default());
        for window in rows.windows(2) {
            assert!(window[0].combined >= window[1].combined);
        }
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, index + 1);
            let expected = 0.5 * row.attack_score + 0.5 * row.defense_score.unwrap_or(0.0);
            assert!(approx(row.combined, expected));
        }
    }
}
