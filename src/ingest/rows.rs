use crate::fields::detect_schema;
use crate::types::record::{DisplayMeta, EntityId, SchemaKind, StatRecord};
use csv::StringRecord;
use std::io::Read;
use tracing::warn;

const NAME_COLUMNS: &[&str] = &["team", "team name", "team_name", "player", "player name", "name"];
const TEAM_ID_COLUMNS: &[&str] = &["team_id", "team id", "teamid", "id"];
const LOGO_COLUMNS: &[&str] = &["logo_id", "logo id", "logo"];
const SHORT_NAME_COLUMNS: &[&str] = &["short_name", "short name", "shortname"];
const COLOR_COLUMNS: &[&str] = &["color", "colour"];
pub(crate) const DATE_COLUMNS: &[&str] = &["date", "measurement date", "measurement_date"];

#[derive(Debug, Clone)]
pub(crate) struct RowLayout {
    headers: Vec<String>,
    schema: SchemaKind,
    name: Option<usize>,
    team_id: Option<usize>,
    logo: Option<usize>,
    short_name: Option<usize>,
    color: Option<usize>,
    pub(crate) date: Option<usize>,
}

impl RowLayout {
    pub(crate) fn from_headers(headers: &StringRecord) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let find = |candidates: &[&str]| {
            candidates.iter().find_map(|candidate| {
                headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(candidate))
            })
        };
        Self {
            schema: detect_schema(headers.iter().map(String::as_str)),
            name: find(NAME_COLUMNS),
            team_id: find(TEAM_ID_COLUMNS),
            logo: find(LOGO_COLUMNS),
            short_name: find(SHORT_NAME_COLUMNS),
            color: find(COLOR_COLUMNS),
            date: find(DATE_COLUMNS),
            headers,
        }
    }

    pub(crate) fn has_name_column(&self) -> bool {
        self.name.is_some()
    }

    fn is_identity_column(&self, index: usize) -> bool {
        [
            self.name,
            self.team_id,
            self.logo,
            self.short_name,
            self.color,
            self.date,
        ]
        .contains(&Some(index))
    }

    pub(crate) fn record(&self, row: &StringRecord) -> Option<StatRecord> {
        let name = self.cell(row, self.name)?;
        let mut record = StatRecord::new(
            EntityId {
                name,
                team_id: self.cell(row, self.team_id),
            },
            self.schema,
        );
        record.meta = DisplayMeta {
            logo_id: self.cell(row, self.logo),
            short_name: self.cell(row, self.short_name),
            color: self.cell(row, self.color),
        };
        for (index, raw) in row.iter().enumerate() {
            if self.is_identity_column(index) {
                continue;
            }
            let Some(header) = self.headers.get(index) else {
                continue;
            };
            if let Some(value) = parse_number(raw) {
                record.values.insert(header.clone(), value);
            }
        }
        Some(record)
    }

    fn cell(&self, row: &StringRecord, index: Option<usize>) -> Option<String> {
        let value = row.get(index?)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_end_matches('%').trim().replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).from_reader(rdr)
}

pub fn load_records_from_reader<R: Read>(rdr: R) -> Result<Vec<StatRecord>, csv::Error> {
    let mut reader = reader(rdr);
    let layout = RowLayout::from_headers(reader.headers()?);
    if !layout.has_name_column() {
        warn!("no team or player name column found; every row will be skipped");
    }

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(row) => match layout.record(&row) {
                Some(record) => records.push(record),
                None => warn!(row = line + 1, "skipping row without a name"),
            },
            Err(e) => warn!("skipping malformed row: {}", e),
        }
    }
    Ok(records)
}
