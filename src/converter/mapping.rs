use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use super::{lines::Pair, ConvertError};

/// Documentation for each mnemonic, kept in the order the mnemonics were first inserted.
#[derive(Debug, Default, Clone)]
pub struct DocMapping {
    entries: IndexMap<String, String>,
    /// Lowercased mnemonic to the mnemonic most recently inserted under that spelling
    folded: HashMap<String, String>,
}

impl PartialEq for DocMapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl DocMapping {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip_all)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = Pair<'a>>) -> Self {
        let mut mapping = Self::new();
        let mut pair_count = 0;
        for pair in pairs {
            mapping.insert(pair.mnemonic, pair.description);
            pair_count += 1;
        }
        tracing::debug!(pairs = pair_count, entries = mapping.len(), "built mapping");

        mapping
    }

    /// Load a mapping from a JSON object with string values, e.g. one written by
    /// [`DocMapping::to_json`].
    #[tracing::instrument(skip_all)]
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let value: Value = serde_json::from_str(json).map_err(ConvertError::Parse)?;
        let Value::Object(object) = value else {
            return Err(ConvertError::NotAnObject);
        };

        let mut mapping = Self::new();
        for (key, value) in object {
            match value {
                Value::String(description) => {
                    mapping.insert(&key, &description);
                }
                _ => return Err(ConvertError::NonStringValue { key }),
            }
        }

        Ok(mapping)
    }

    /// Insert the description for a mnemonic, returning the description it replaced.
    ///
    /// A replaced mnemonic keeps its original position.
    pub fn insert(&mut self, mnemonic: &str, description: &str) -> Option<String> {
        self.folded.insert(mnemonic.to_lowercase(), mnemonic.to_string());
        let previous = self.entries.insert(mnemonic.to_string(), description.to_string());
        if previous.is_some() {
            tracing::debug!(mnemonic, "overwriting duplicate mnemonic");
        }

        previous
    }

    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.entries.get(mnemonic).map(String::as_str)
    }

    /// Case-insensitive lookup, so that `lda` finds the documentation for `LDA`.
    ///
    /// When several mnemonics differ only in case, the one inserted last answers for all of them.
    pub fn describe(&self, word: &str) -> Option<&str> {
        self.folded
            .get(&word.to_lowercase())
            .and_then(|mnemonic| self.get(mnemonic))
    }

    pub fn is_instruction(&self, word: &str) -> bool {
        self.describe(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(mnemonic, description)| (mnemonic.as_str(), description.as_str()))
    }

    pub(crate) fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }
}
