use crate::types::report::Report;

pub fn to_markdown(report: &Report, decimals: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));

    let context: Vec<String> = [
        report.club.as_ref().map(|club| format!("Club: {club}")),
        report.season.as_ref().map(|season| format!("Season: {season}")),
        Some(format!("Generated: {}", report.generated_at)),
        report
            .source_digest
            .as_ref()
            .map(|digest| format!("Source sha256: `{digest}`")),
    ]
    .into_iter()
    .flatten()
    .collect();
    for line in &context {
        output.push_str(&format!("- {line}\n"));
    }
    output.push('\n');

    if report.rows.is_empty() {
        output.push_str("_No rows._\n");
    } else {
        output.push_str(&format!("| {} |\n", report.columns.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            report.columns.iter().map(|_| "---|").collect::<String>()
        ));
        for row in &report.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.display(decimals).replace('|', "\\|"))
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }

    if !report.notes.is_empty() {
        output.push_str("\n## Notes\n\n");
        for note in &report.notes {
            output.push_str(&format!("- {note}\n"));
        }
    }

    output
}
