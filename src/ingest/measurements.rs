use super::rows::{reader, RowLayout};
use crate::trend::Measurement;
use chrono::NaiveDate;
use std::io::Read;
use tracing::warn;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y", "%d/%m/%y"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // Some exports append a time component; the day is all that matters.
    let day = raw.split_whitespace().next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
}

pub fn load_measurements_from_reader<R: Read>(rdr: R) -> Result<Vec<Measurement>, csv::Error> {
    let mut reader = reader(rdr);
    let layout = RowLayout::from_headers(reader.headers()?);
    let Some(date_column) = layout.date else {
        warn!("no date column found; measurements cannot be ordered and will be skipped");
        return Ok(Vec::new());
    };

    let mut measurements = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping malformed measurement row: {}", e);
                continue;
            }
        };
        let Some(record) = layout.record(&row) else {
            warn!("skipping measurement row without a player name");
            continue;
        };
        let raw_date = row.get(date_column).unwrap_or_default();
        match parse_date(raw_date) {
            Some(date) => measurements.push(Measurement { date, record }),
            None => warn!(
                player = record.name(),
                date = raw_date,
                "skipping measurement with unparseable date"
            ),
        }
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::BodyMetric;

    #[test]
    fn parse_date_accepts_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 3);
        assert_eq!(parse_date("2024-09-03"), expected);
        assert_eq!(parse_date("03/09/2024"), expected);
        assert_eq!(parse_date("03.09.2024"), expected);
        assert_eq!(parse_date("2024-09-03 08:15"), expected);
        assert_eq!(parse_date("Sept 3rd"), None);
    }

    #[test]
    fn measurements_parse_with_body_metrics() {
        let csv_data = "\
Player,Date,Weight (kg),Body fat %,Lean mass (kg)
Ziv Ben Shimol,01/09/2024,78.2,11.4,69.3
Omer Atzili,2024-09-01,72.0,9.8,64.9";

        let measurements =
            load_measurements_from_reader(csv_data.as_bytes()).expect("csv should parse");
        assert_eq!(measurements.len(), 2);
        assert_eq!(measurements[0].record.name(), "Ziv Ben Shimol");
        assert_eq!(measurements[0].date, measurements[1].date);
        assert_eq!(measurements[0].value(BodyMetric::Weight), 78.2);
        assert_eq!(measurements[0].value(BodyMetric::BodyFat), 11.4);
        assert_eq!(measurements[1].value(BodyMetric::LeanMass), 64.9);
        assert_eq!(measurements[1].value(BodyMetric::MuscleMass), 0.0);
    }

    #[test]
    fn rows_with_bad_dates_are_skipped() {
        let csv_data = "\
name,date,weight
A,someday,80
B,2024-09-01,75";

        let measurements =
            load_measurements_from_reader(csv_data.as_bytes()).expect("csv should parse");
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].record.name(), "B");
    }

    #[test]
    fn missing_date_column_yields_nothing() {
        let csv_data = "\
name,weight
A,80";

        let measurements =
            load_measurements_from_reader(csv_data.as_bytes()).expect("csv should parse");
        assert!(measurements.is_empty());
    }
}
