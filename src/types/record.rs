use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Legacy,
    Descriptive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityId {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl EntityId {
    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRecord {
    #[serde(flatten)]
    pub id: EntityId,
    #[serde(flatten)]
    pub meta: DisplayMeta,
    pub schema: SchemaKind,
    #[serde(skip)]
    pub values: BTreeMap<String, f64>,
}

impl StatRecord {
    pub fn new(id: EntityId, schema: SchemaKind) -> Self {
        Self {
            id,
            meta: DisplayMeta::default(),
            schema,
            values: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_value(mut self, column: &str, value: f64) -> Self {
        self.values.insert(column.to_string(), value);
        self
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }
}
