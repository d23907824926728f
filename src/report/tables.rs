use crate::differential::CornerSummaryRow;
use crate::scoring::ScorerKind;
use crate::trend::{BodyMetric, BodyRow};
use crate::types::report::{Cell, Finding, Report};
use crate::types::scoring::ScoredEntity;

fn report(title: impl Into<String>, columns: Vec<String>) -> Report {
    let mut report = Report::new(title, &[]);
    report.columns = columns;
    report
}

pub fn truncate_top<T>(rows: &mut Vec<T>, top: Option<usize>) {
    if let Some(top) = top {
        rows.truncate(top);
    }
}

pub fn score_table(kind: ScorerKind, opponent_analysis: bool, entities: &[ScoredEntity]) -> Report {
    let title = if opponent_analysis {
        format!("{} (opponent analysis)", kind.title())
    } else {
        kind.title().to_string()
    };

    let mut columns = vec!["rank".to_string(), "name".to_string()];
    for spec in kind.specs(opponent_analysis) {
        columns.push(spec.key.to_string());
        columns.push(format!("{}_score", spec.key));
    }
    columns.push("composite".to_string());

    let mut table = report(title, columns);
    for entity in entities {
        let mut row = vec![Cell::text(entity.rank.to_string()), Cell::text(entity.name())];
        for metric in &entity.metrics {
            row.push(Cell::Number(metric.raw));
            row.push(Cell::Number(metric.score));
        }
        row.push(Cell::Number(entity.composite));
        table.push_row(row);
    }
    table
}

pub fn corner_summary_table(rows: &[CornerSummaryRow]) -> Report {
    let columns = [
        "rank",
        "name",
        "attack",
        "defense",
        "combined",
        "corners_diff",
        "shots_diff",
        "goals_diff",
        "xg_diff",
    ];
    let mut table = report(
        "Corner summary",
        columns.iter().map(|column| column.to_string()).collect(),
    );
    for row in rows {
        let diffs = row.diffs;
        table.push_row(vec![
            Cell::text(row.rank.to_string()),
            Cell::text(row.id.name.clone()),
            Cell::Number(row.attack_score),
            Cell::optional(row.defense_score),
            Cell::Number(row.combined),
            Cell::optional(diffs.map(|d| d.corners)),
            Cell::optional(diffs.map(|d| d.shots)),
            Cell::optional(diffs.map(|d| d.goals)),
            Cell::optional(diffs.map(|d| d.xg)),
        ]);
    }
    table
}

pub fn body_table(metric: BodyMetric, rows: &[BodyRow]) -> Report {
    let columns = vec![
        "name".to_string(),
        metric.label().to_string(),
        "delta".to_string(),
        "measurements".to_string(),
        "period".to_string(),
        "Body fat %".to_string(),
        "benchmark".to_string(),
        "benchmark_distance".to_string(),
    ];
    let mut table = report(format!("Body composition: {}", metric.label()), columns);
    for row in rows {
        let delta = (!row.trend.is_first_measurement).then_some(row.trend.delta);
        table.push_row(vec![
            Cell::text(row.name.clone()),
            Cell::Number(row.latest),
            Cell::optional(delta),
            Cell::text(row.trend.count.to_string()),
            Cell::text(row.trend.date_range_label.clone()),
            Cell::Number(row.body_fat),
            row.benchmark
                .map(|(min, max)| Cell::text(format!("{min}-{max}")))
                .unwrap_or(Cell::Empty),
            Cell::Number(row.benchmark_distance),
        ]);
    }
    table
}

pub fn findings_table(source: &str, findings: &[Finding]) -> Report {
    let columns = ["severity", "id", "title", "detail", "file"];
    let mut table = report(
        format!("Data check: {source}"),
        columns.iter().map(|column| column.to_string()).collect(),
    );
    for finding in findings {
        table.push_row(vec![
            Cell::text(if finding.blocking { "blocking" } else { "warning" }),
            Cell::text(finding.id.clone()),
            Cell::text(finding.title.clone()),
            Cell::text(finding.body.clone()),
            finding.file.clone().map(Cell::Text).unwrap_or(Cell::Empty),
        ]);
    }
    table
}

pub fn unresolved_note(names: &[String]) -> Option<String> {
    (!names.is_empty()).then(|| format!("unresolved identities: {}", names.join(", ")))
}
