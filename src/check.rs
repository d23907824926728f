use crate::fields::{is_present, Field};
use crate::identity::{normalize_identity, IdentityResolver};
use crate::scoring::ScorerKind;
use crate::types::record::StatRecord;
use crate::types::report::Finding;
use std::collections::BTreeMap;

pub struct CheckInput<'a> {
    pub records: &'a [StatRecord],
    pub source: &'a str,
    pub scorer: Option<ScorerKind>,
    pub opponent_analysis: bool,
    pub resolver: &'a IdentityResolver,
}

pub fn check_findings(input: &CheckInput<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    if input.records.is_empty() {
        findings.push(Finding {
            id: "data.empty".to_string(),
            title: "No usable rows".to_string(),
            body: "The export has no rows with a team or player name; nothing can be scored."
                .to_string(),
            blocking: true,
            file: Some(input.source.to_string()),
        });
        return findings;
    }

    if let Some(kind) = input.scorer {
        let missing = missing_fields(input.records, kind.required_fields(input.opponent_analysis));
        if !missing.is_empty() {
            findings.push(Finding {
                id: "data.missing_fields".to_string(),
                title: format!("{} inputs missing", kind.title()),
                body: format!(
                    "No row provides {}; those inputs read as 0 for every entity.",
                    missing.join(", ")
                ),
                blocking: false,
                file: Some(input.source.to_string()),
            });
        }
    }

    let duplicates = duplicate_identities(input.records);
    if !duplicates.is_empty() {
        findings.push(Finding {
            id: "identity.duplicates".to_string(),
            title: "Duplicate identities".to_string(),
            body: format!(
                "These names collide after normalization and will be ranked separately: {}.",
                duplicates.join("; ")
            ),
            blocking: false,
            file: Some(input.source.to_string()),
        });
    }

    if input.resolver.has_declared_identities() {
        let unresolved = input
            .resolver
            .unresolved(input.records.iter().map(StatRecord::name));
        if !unresolved.is_empty() {
            findings.push(Finding {
                id: "identity.unresolved".to_string(),
                title: "Unresolved identities".to_string(),
                body: format!(
                    "Not declared in [identities.aliases]: {}.",
                    unresolved.join(", ")
                ),
                blocking: false,
                file: Some("clubstats.toml".to_string()),
            });
        }
    }

    findings
}

fn missing_fields(records: &[StatRecord], required: &[Field]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|field| !records.iter().any(|record| is_present(record, **field)))
        .map(|field| field.key())
        .collect()
}

fn duplicate_identities(records: &[StatRecord]) -> Vec<String> {
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for record in records {
        groups
            .entry(normalize_identity(record.name()))
            .or_default()
            .push(record.name());
    }
    groups
        .into_values()
        .filter(|names| names.len() > 1)
        .map(|names| names.join(" / "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::AliasTable;
    use crate::scoring::test_support::team;

    fn findings_for(
        records: &[StatRecord],
        scorer: Option<ScorerKind>,
        resolver: &IdentityResolver,
    ) -> Vec<Finding> {
        check_findings(&CheckInput {
            records,
            source: "stats.csv",
            scorer,
            opponent_analysis: false,
            resolver,
        })
    }

    #[test]
    fn empty_dataset_is_blocking() {
        let findings = findings_for(&[], Some(ScorerKind::Duels), &IdentityResolver::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "data.empty");
        assert!(findings[0].blocking);
    }

    #[test]
    fn missing_scorer_fields_warn() {
        let records = vec![team("A", &[("ground_duels_pct", 50.0)])];
        let findings = findings_for(&records, Some(ScorerKind::Duels), &IdentityResolver::default());
        let finding = findings
            .iter()
            .find(|finding| finding.id == "data.missing_fields")
            .expect("missing aerial duels should be reported");
        assert!(!finding.blocking);
        assert!(finding.body.contains("aerial_duels_pct"));
        assert!(!finding.body.contains("ground_duels_pct"));
    }

    #[test]
    fn complete_export_has_no_findings() {
        let records = vec![
            team("A", &[("ground_duels_pct", 50.0), ("aerial_duels_pct", 40.0)]),
            team("B", &[("ground_duels_pct", 55.0), ("aerial_duels_pct", 45.0)]),
        ];
        let findings = findings_for(&records, Some(ScorerKind::Duels), &IdentityResolver::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn duplicate_identities_after_normalization_warn() {
        let records = vec![team("José López", &[]), team("jose  lopez", &[]), team("Other", &[])];
        let findings = findings_for(&records, None, &IdentityResolver::default());
        let finding = findings
            .iter()
            .find(|finding| finding.id == "identity.duplicates")
            .expect("duplicates should be reported");
        assert!(finding.body.contains("José López / jose  lopez"));
        assert!(!finding.body.contains("Other"));
    }

    #[test]
    fn unresolved_identities_reported_only_with_alias_table() {
        let records = vec![team("Maccabi North", &[]), team("Stranger FC", &[])];
        assert!(findings_for(&records, None, &IdentityResolver::default()).is_empty());

        let mut aliases = AliasTable::default();
        aliases.insert("Maccabi North", &["MNO".to_string()]);
        let resolver = IdentityResolver::new(aliases);
        let findings = findings_for(&records, None, &resolver);
        let finding = findings
            .iter()
            .find(|finding| finding.id == "identity.unresolved")
            .expect("unresolved names should be reported");
        assert!(finding.body.contains("Stranger FC"));
        assert!(!finding.body.contains("Maccabi North"));
    }
}
