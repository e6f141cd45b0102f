use serde::Serialize;

use super::descriptions::describe;
use super::interpretations::Interpretations;
use crate::scoring::domain::{ProfileResult, TraitKey};

/// Narrative report assembled from a scored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub summary: String,
    pub primary_strengths: Vec<String>,
    pub primary_weaknesses: Vec<String>,
    pub how_to_work_with: String,
    pub secondary_influence: String,
    pub development_areas: Vec<String>,
    pub interpretations: Interpretations,
}

impl ProfileReport {
    pub fn from_result(result: &ProfileResult) -> Self {
        let primary = describe(result.primary);
        let secondary = describe(result.secondary);

        Self {
            summary: summary(result),
            primary_strengths: to_owned(primary.strengths),
            primary_weaknesses: to_owned(primary.weaknesses),
            how_to_work_with: primary.how_to_work_with.to_string(),
            secondary_influence: format!(
                "Your secondary profile {} ({}) adds traits of being {}.",
                result.secondary,
                secondary.title,
                secondary
                    .characteristics
                    .iter()
                    .take(3)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            development_areas: to_owned(development_areas(result.primary)),
            interpretations: Interpretations::from_result(result),
        }
    }
}

fn summary(result: &ProfileResult) -> String {
    let primary = describe(result.primary);
    let secondary = describe(result.secondary);

    let mut lines = vec![
        format!(
            "Your DISC profile is predominantly {} ({}), with {} ({}) as secondary.",
            primary.title, result.primary, secondary.title, result.secondary
        ),
        String::new(),
        "Your DISC levels are:".to_string(),
    ];
    lines.extend(result.levels.iter().map(|(key, level)| {
        format!(
            "- {} ({}): {} ({}/25)",
            key,
            describe(key).title,
            level.label(),
            result.normalized_scores[key]
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "As a {} dominant profile you tend to be motivated by {}.",
        result.primary, primary.motivation
    ));
    lines.push(String::new());
    lines.push("Your main characteristics include:".to_string());
    lines.extend(
        primary
            .characteristics
            .iter()
            .take(5)
            .map(|characteristic| format!("- {characteristic}")),
    );
    lines.push(String::new());
    lines.push(format!(
        "Your secondary {} profile contributes elements of {}.",
        result.secondary, secondary.motivation
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn development_areas(primary: TraitKey) -> &'static [&'static str] {
    match primary {
        TraitKey::Dominance => &[
            "Work on patience and empathy with others",
            "Develop active listening skills",
        ],
        TraitKey::Influence => &[
            "Improve organization and attention to detail",
            "Build the discipline to see tasks through",
        ],
        TraitKey::Steadiness => &[
            "Be more assertive and voice your opinions",
            "Develop adaptability to change",
        ],
        TraitKey::Conformity => &[
            "Be less critical and more open to new approaches",
            "Develop interpersonal communication skills",
        ],
    }
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
