use serde::Serialize;

use crate::scoring::domain::TraitKey;

/// Reference description of one trait, independent of any respondent's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDescription {
    pub key: TraitKey,
    pub title: &'static str,
    pub motivation: &'static str,
    pub characteristics: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub how_to_work_with: &'static str,
}

static DOMINANCE: TraitDescription = TraitDescription {
    key: TraitKey::Dominance,
    title: "Dominance",
    motivation: "results, power and challenges",
    characteristics: &[
        "direct",
        "decisive",
        "results-oriented",
        "competitive",
        "assertive",
    ],
    strengths: &["Leadership", "Fast decision making", "Problem solving"],
    weaknesses: &["Impatience", "Insensitivity to the needs of others"],
    how_to_work_with: "Be direct, focus on results and skip unnecessary detail.",
};

static INFLUENCE: TraitDescription = TraitDescription {
    key: TraitKey::Influence,
    title: "Influence",
    motivation: "social recognition, persuasion and popularity",
    characteristics: &[
        "enthusiastic",
        "optimistic",
        "persuasive",
        "sociable",
        "communicative",
    ],
    strengths: &["Communication", "Networking", "Team motivation"],
    weaknesses: &["Disorganization", "Lack of attention to detail"],
    how_to_work_with: "Be friendly, show interest and allow time for socializing.",
};

static STEADINESS: TraitDescription = TraitDescription {
    key: TraitKey::Steadiness,
    title: "Steadiness",
    motivation: "cooperation, security and reliability",
    characteristics: &["patient", "loyal", "predictable", "cooperative", "calm"],
    strengths: &["Cooperation", "Consistency", "Patience"],
    weaknesses: &["Resistance to change", "Difficulty saying no"],
    how_to_work_with: "Be consistent and sincere, and avoid abrupt changes.",
};

static CONFORMITY: TraitDescription = TraitDescription {
    key: TraitKey::Conformity,
    title: "Conformity",
    motivation: "quality, accuracy and expertise",
    characteristics: &[
        "analytical",
        "detail-oriented",
        "precise",
        "systematic",
        "organized",
    ],
    strengths: &["Detailed analysis", "Quality of work", "Organization"],
    weaknesses: &["Perfectionism", "Excessive criticism"],
    how_to_work_with: "Provide details, be precise and use a logical approach.",
};

pub fn describe(key: TraitKey) -> &'static TraitDescription {
    match key {
        TraitKey::Dominance => &DOMINANCE,
        TraitKey::Influence => &INFLUENCE,
        TraitKey::Steadiness => &STEADINESS,
        TraitKey::Conformity => &CONFORMITY,
    }
}

/// All four descriptions in canonical order.
pub fn catalog() -> [&'static TraitDescription; 4] {
    TraitKey::CANONICAL.map(describe)
}
