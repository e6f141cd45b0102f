use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::{self, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the four DISC behavioral traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitKey {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Steadiness,
    #[serde(rename = "C")]
    Conformity,
}

impl TraitKey {
    /// Fixed order used for tie-breaks and for emitting per-trait content.
    pub const CANONICAL: [TraitKey; 4] = [
        TraitKey::Dominance,
        TraitKey::Influence,
        TraitKey::Steadiness,
        TraitKey::Conformity,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TraitKey::Dominance => "D",
            TraitKey::Influence => "I",
            TraitKey::Steadiness => "S",
            TraitKey::Conformity => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraitKey::Dominance => "Dominance",
            TraitKey::Influence => "Influence",
            TraitKey::Steadiness => "Steadiness",
            TraitKey::Conformity => "Conformity",
        }
    }

    /// Parses a bare trait symbol (`D`, `I`, `S`, `C`), ignoring case and surrounding whitespace.
    pub fn from_symbol(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "D" => Some(TraitKey::Dominance),
            "I" => Some(TraitKey::Influence),
            "S" => Some(TraitKey::Steadiness),
            "C" => Some(TraitKey::Conformity),
            _ => None,
        }
    }

    fn position(self) -> usize {
        match self {
            TraitKey::Dominance => 0,
            TraitKey::Influence => 1,
            TraitKey::Steadiness => 2,
            TraitKey::Conformity => 3,
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Dense per-trait table serialized as a `{"D": .., "I": .., "S": .., "C": ..}` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerTrait<T>([T; 4]);

impl<T> PerTrait<T> {
    pub fn from_fn(mut f: impl FnMut(TraitKey) -> T) -> Self {
        Self(TraitKey::CANONICAL.map(&mut f))
    }

    pub fn map<U>(&self, mut f: impl FnMut(TraitKey, &T) -> U) -> PerTrait<U> {
        PerTrait::from_fn(|key| f(key, &self[key]))
    }

    /// Entries in canonical `D, I, S, C` order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKey, &T)> {
        TraitKey::CANONICAL
            .into_iter()
            .map(move |key| (key, &self.0[key.position()]))
    }
}

impl<T> Index<TraitKey> for PerTrait<T> {
    type Output = T;

    fn index(&self, key: TraitKey) -> &T {
        &self.0[key.position()]
    }
}

impl<T> IndexMut<TraitKey> for PerTrait<T> {
    fn index_mut(&mut self, key: TraitKey) -> &mut T {
        &mut self.0[key.position()]
    }
}

impl<T: Serialize> Serialize for PerTrait<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.symbol(), value)?;
        }
        map.end()
    }
}

/// Question identifier; the quiz sends either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuestionIdVisitor;

        impl<'de> Visitor<'de> for QuestionIdVisitor {
            type Value = QuestionId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a question id as a string or integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<QuestionId, E> {
                Ok(QuestionId(value.trim().to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<QuestionId, E> {
                Ok(QuestionId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<QuestionId, E> {
                Ok(QuestionId(value.to_string()))
            }
        }

        deserializer.deserialize_any(QuestionIdVisitor)
    }
}

/// One forced-choice response. Either selection may be missing when the quiz timer
/// advanced past an unanswered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(default)]
    pub most: Option<String>,
    #[serde(default)]
    pub least: Option<String>,
}

impl Answer {
    pub fn new(
        question_id: impl Into<QuestionId>,
        most: impl Into<String>,
        least: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            most: Some(most.into()),
            least: Some(least.into()),
        }
    }
}

/// Which half of an answer a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Most,
    Least,
}

impl SelectionField {
    pub fn label(self) -> &'static str {
        match self {
            SelectionField::Most => "most",
            SelectionField::Least => "least",
        }
    }
}

/// Per-trait selection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitTally {
    pub most_count: u32,
    pub least_count: u32,
}

impl TraitTally {
    pub fn raw(&self) -> i32 {
        self.most_count as i32 - self.least_count as i32
    }
}

/// Raw and normalized score for one trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitScore {
    pub raw: i32,
    pub normalized: u8,
}

/// Banded interpretation of a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Non-fatal notice about input that was skipped or looks suspicious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Diagnostic {
    UnknownToken {
        question_id: QuestionId,
        field: SelectionField,
        token: String,
    },
    ConflictingSelection {
        question_id: QuestionId,
        trait_key: TraitKey,
    },
    Unanswered {
        question_id: QuestionId,
        field: SelectionField,
    },
    DuplicateQuestion {
        question_id: QuestionId,
    },
}

impl Diagnostic {
    pub fn question_id(&self) -> &QuestionId {
        match self {
            Diagnostic::UnknownToken { question_id, .. }
            | Diagnostic::ConflictingSelection { question_id, .. }
            | Diagnostic::Unanswered { question_id, .. }
            | Diagnostic::DuplicateQuestion { question_id } => question_id,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Diagnostic::UnknownToken {
                question_id,
                field,
                token,
            } => format!(
                "question {question_id}: unknown {} selection '{token}' ignored",
                field.label()
            ),
            Diagnostic::ConflictingSelection {
                question_id,
                trait_key,
            } => format!(
                "question {question_id}: most and least both select {trait_key}; answer excluded"
            ),
            Diagnostic::Unanswered { question_id, field } => {
                format!("question {question_id}: no {} selection", field.label())
            }
            Diagnostic::DuplicateQuestion { question_id } => {
                format!("question {question_id}: submitted more than once")
            }
        }
    }
}

/// Complete scoring outcome for one answer collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub raw_scores: PerTrait<i32>,
    pub normalized_scores: PerTrait<u8>,
    pub levels: PerTrait<Level>,
    pub primary: TraitKey,
    pub secondary: TraitKey,
    pub profile: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub tallies: PerTrait<TraitTally>,
    pub answer_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProfileResult {
    pub fn score(&self, key: TraitKey) -> TraitScore {
        TraitScore {
            raw: self.raw_scores[key],
            normalized: self.normalized_scores[key],
        }
    }

    pub fn scores(&self) -> PerTrait<TraitScore> {
        PerTrait::from_fn(|key| self.score(key))
    }
}
