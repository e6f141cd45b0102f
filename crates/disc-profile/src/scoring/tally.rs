use std::collections::HashSet;

use super::domain::{Answer, Diagnostic, PerTrait, QuestionId, SelectionField, TraitKey, TraitTally};
use super::mapping::TokenMap;

pub(crate) struct TallyOutcome {
    pub tallies: PerTrait<TraitTally>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Counts most/least selections per trait. Unresolvable fields are skipped and answers whose
/// selections collapse onto one trait are excluded entirely; both leave a diagnostic behind.
pub(crate) fn tally_answers(answers: &[Answer], tokens: &TokenMap) -> TallyOutcome {
    let mut tallies = PerTrait::<TraitTally>::default();
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<&QuestionId> = HashSet::with_capacity(answers.len());

    for answer in answers {
        if !seen.insert(&answer.question_id) {
            diagnostics.push(Diagnostic::DuplicateQuestion {
                question_id: answer.question_id.clone(),
            });
        }

        let most = resolve_selection(
            answer,
            answer.most.as_deref(),
            SelectionField::Most,
            tokens,
            &mut diagnostics,
        );
        let least = resolve_selection(
            answer,
            answer.least.as_deref(),
            SelectionField::Least,
            tokens,
            &mut diagnostics,
        );

        if let (Some(most), Some(least)) = (most, least) {
            if most == least {
                diagnostics.push(Diagnostic::ConflictingSelection {
                    question_id: answer.question_id.clone(),
                    trait_key: most,
                });
                continue;
            }
        }

        if let Some(key) = most {
            tallies[key].most_count += 1;
        }
        if let Some(key) = least {
            tallies[key].least_count += 1;
        }
    }

    TallyOutcome {
        tallies,
        diagnostics,
    }
}

fn resolve_selection(
    answer: &Answer,
    token: Option<&str>,
    field: SelectionField,
    tokens: &TokenMap,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<TraitKey> {
    let token = match token.map(str::trim) {
        Some(token) if !token.is_empty() => token,
        _ => {
            diagnostics.push(Diagnostic::Unanswered {
                question_id: answer.question_id.clone(),
                field,
            });
            return None;
        }
    };

    let resolved = tokens.resolve(&answer.question_id, token);
    if resolved.is_none() {
        diagnostics.push(Diagnostic::UnknownToken {
            question_id: answer.question_id.clone(),
            field,
            token: token.to_string(),
        });
    }
    resolved
}
