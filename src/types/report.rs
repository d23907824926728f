use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn optional(value: Option<f64>) -> Self {
        value.map(Self::Number).unwrap_or(Self::Empty)
    }

    pub fn display(&self, decimals: usize) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) if value.is_infinite() && *value > 0.0 => "∞".to_string(),
            Self::Number(value) if value.is_infinite() => "-∞".to_string(),
            Self::Number(value) => format!("{value:.decimals$}"),
            Self::Empty => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_digest: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub notes: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            club: None,
            season: None,
            generated_at: chrono::Utc::now().to_rfc3339(),
            source_digest: None,
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_display_handles_sentinels() {
        assert_eq!(Cell::Number(f64::INFINITY).display(2), "∞");
        assert_eq!(Cell::Number(35.654).display(2), "35.65");
        assert_eq!(Cell::Empty.display(2), "-");
        assert_eq!(Cell::optional(None), Cell::Empty);
    }
}
