use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category → substring list used by the catalog filters.
///
/// Keywords are stored lowercase and trimmed; empty keywords are dropped.
/// Matching is a plain substring test against an already lowercased haystack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct KeywordTable(BTreeMap<String, Vec<String>>);

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(category, keywords);
        self
    }

    /// Adds keywords to a category, creating it when missing.
    pub fn insert<I, S>(&mut self, category: impl Into<String>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.0.entry(category.into()).or_default();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !entry.contains(&keyword) {
                entry.push(keyword);
            }
        }
    }

    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `haystack` must already be lowercase.
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords().any(|keyword| haystack.contains(keyword))
    }
}

impl From<BTreeMap<String, Vec<String>>> for KeywordTable {
    fn from(value: BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::new();
        for (category, keywords) in value {
            table.insert(category, keywords);
        }
        table
    }
}

impl From<KeywordTable> for BTreeMap<String, Vec<String>> {
    fn from(value: KeywordTable) -> Self {
        value.0
    }
}
