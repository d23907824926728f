use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, trim, collapse whitespace and strip diacritics.
pub fn normalize_identity(raw: &str) -> String {
    let folded: String = raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Canonical(String),
    Unresolved(String),
}

impl Resolution {
    pub fn key(&self) -> &str {
        match self {
            Self::Canonical(key) | Self::Unresolved(key) => key,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    variants: HashMap<String, String>,
    canonical: BTreeSet<String>,
}

impl AliasTable {
    pub fn from_config(aliases: &BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::default();
        for (canonical, variants) in aliases {
            table.insert(canonical, variants);
        }
        table
    }

    pub fn insert(&mut self, canonical: &str, variants: &[String]) {
        let key = normalize_identity(canonical);
        for variant in variants {
            self.variants.insert(normalize_identity(variant), key.clone());
        }
        self.canonical.insert(key);
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    aliases: AliasTable,
    known: BTreeSet<String>,
}

impl IdentityResolver {
    pub fn new(aliases: AliasTable) -> Self {
        let known = aliases.canonical.clone();
        Self { aliases, known }
    }

    pub fn with_known<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.known.extend(names.into_iter().map(normalize_identity));
        self
    }

    pub fn has_declared_identities(&self) -> bool {
        !self.known.is_empty()
    }

    pub fn resolve(&self, raw: &str) -> Resolution {
        let key = normalize_identity(raw);
        if let Some(canonical) = self.aliases.variants.get(&key) {
            return Resolution::Canonical(canonical.clone());
        }
        if self.known.contains(&key) {
            return Resolution::Canonical(key);
        }
        Resolution::Unresolved(key)
    }

    pub fn unresolved<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut missing = Vec::new();
        for name in names {
            let resolution = self.resolve(name);
            if !resolution.is_resolved() && seen.insert(resolution.key().to_string()) {
                warn!(identity = name, "unresolved identity");
                missing.push(name.to_string());
            }
        }
        missing
    }
}
