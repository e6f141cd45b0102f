use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::domain::{QuestionId, TraitKey};

/// Resolves the tokens a quiz submits (trait symbols, column letters, or per-question words)
/// to trait keys. One map is built at startup and handed to the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMap {
    /// Question-independent tokens, matched case-insensitively.
    #[serde(default)]
    symbols: BTreeMap<String, TraitKey>,
    /// Surface words per question, matched exactly after trimming.
    #[serde(default)]
    words: BTreeMap<QuestionId, BTreeMap<String, TraitKey>>,
}

impl Default for TokenMap {
    fn default() -> Self {
        Self::trait_keys()
    }
}

impl TokenMap {
    /// Identity map over the trait symbols `D`, `I`, `S`, `C`.
    pub fn trait_keys() -> Self {
        Self::from_symbols(
            TraitKey::CANONICAL
                .into_iter()
                .map(|key| (key.symbol().to_string(), key)),
        )
    }

    /// Quiz column layout where options A-D list the D, I, S, C words in that order.
    pub fn column_letters() -> Self {
        Self::from_symbols([
            ("A".to_string(), TraitKey::Dominance),
            ("B".to_string(), TraitKey::Influence),
            ("C".to_string(), TraitKey::Steadiness),
            ("D".to_string(), TraitKey::Conformity),
        ])
    }

    pub fn from_symbols(symbols: impl IntoIterator<Item = (String, TraitKey)>) -> Self {
        Self {
            symbols: symbols
                .into_iter()
                .map(|(token, key)| (normalize_symbol(&token), key))
                .collect(),
            words: BTreeMap::new(),
        }
    }

    /// Registers the option words shown for one question.
    pub fn with_question_words(
        mut self,
        question_id: QuestionId,
        words: impl IntoIterator<Item = (String, TraitKey)>,
    ) -> Self {
        let entry = self.words.entry(question_id).or_default();
        for (word, key) in words {
            entry.insert(word.trim().to_string(), key);
        }
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, TokenMapError> {
        let parsed: TokenMap = serde_json::from_str(raw).map_err(TokenMapError::Parse)?;
        if parsed.symbols.is_empty() && parsed.words.is_empty() {
            return Err(TokenMapError::Empty);
        }

        let words = parsed
            .words
            .into_iter()
            .map(|(question, table)| {
                let table = table
                    .into_iter()
                    .map(|(word, key)| (word.trim().to_string(), key))
                    .collect();
                (question, table)
            })
            .collect();
        // Symbols are re-keyed so lookups stay case-insensitive whatever the file casing.
        let mut map = Self::from_symbols(parsed.symbols);
        map.words = words;
        Ok(map)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TokenMapError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TokenMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn resolve(&self, question_id: &QuestionId, token: &str) -> Option<TraitKey> {
        let trimmed = token.trim();
        if let Some(key) = self
            .words
            .get(question_id)
            .and_then(|table| table.get(trimmed))
        {
            return Some(*key);
        }
        self.symbols.get(&normalize_symbol(trimmed)).copied()
    }
}

fn normalize_symbol(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Where the configured token map comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMapSource {
    TraitKeys,
    ColumnLetters,
    File(PathBuf),
}

impl TokenMapSource {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "trait-keys" | "traits" | "disc" => Self::TraitKeys,
            "column-letters" | "letters" | "abcd" => Self::ColumnLetters,
            _ => Self::File(PathBuf::from(value.trim())),
        }
    }

    pub fn load(&self) -> Result<TokenMap, TokenMapError> {
        match self {
            TokenMapSource::TraitKeys => Ok(TokenMap::trait_keys()),
            TokenMapSource::ColumnLetters => Ok(TokenMap::column_letters()),
            TokenMapSource::File(path) => TokenMap::from_path(path),
        }
    }
}

/// Failure to build a token map from configuration.
#[derive(Debug, thiserror::Error)]
pub enum TokenMapError {
    #[error("unable to read token map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("token map is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("token map defines no symbols or words")]
    Empty,
}
