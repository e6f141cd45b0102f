use crate::infra::{build_scorer, token_map_source};
use clap::Args;
use disc_profile::config::AppConfig;
use disc_profile::error::AppError;
use disc_profile::scoring::content::describe;
use disc_profile::scoring::sheet::read_answers_path;
use disc_profile::scoring::{ProfileReport, ProfileResult};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer file: JSON (list or keyed by question id) or CSV with question_id,most,least
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Token map to resolve selections with: trait-keys, column-letters, or a JSON file
    #[arg(long)]
    pub(crate) token_map: Option<String>,
    /// Include the narrative profile report
    #[arg(long)]
    pub(crate) report: bool,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput<'a> {
    result: &'a ProfileResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ProfileReport>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        token_map,
        report,
        json,
    } = args;

    let config = AppConfig::load()?;
    let source = token_map_source(&config.scoring, token_map.as_deref());
    let scorer = build_scorer(&source)?;

    let answers = read_answers_path(&answers)?;
    let result = scorer.score(&answers)?;
    let report = report.then(|| ProfileReport::from_result(&result));

    if json {
        let output = ScoreOutput {
            result: &result,
            report: report.as_ref(),
        };
        let rendered = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_profile(&result, report.as_ref()));
    }

    Ok(())
}

pub(crate) fn render_profile(result: &ProfileResult, report: Option<&ProfileReport>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "DISC profile {} ({} / {})",
        result.profile,
        describe(result.primary).title,
        describe(result.secondary).title
    ));
    lines.push(format!("Answers scored: {}", result.answer_count));

    lines.push("\nScores".to_string());
    for (key, score) in result.scores().iter() {
        lines.push(format!(
            "- {} {}: {}/25 (raw {:+}, {})",
            key,
            key.label(),
            score.normalized,
            score.raw,
            result.levels[key].label()
        ));
    }

    push_section(&mut lines, "Strengths", &result.strengths);
    push_section(&mut lines, "Weaknesses", &result.weaknesses);
    push_section(&mut lines, "Recommendations", &result.recommendations);

    if !result.diagnostics.is_empty() {
        let notices: Vec<String> = result
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.summary())
            .collect();
        push_section(&mut lines, "Input notices", &notices);
    }

    if let Some(report) = report {
        lines.push(format!("\n{}", report.summary.trim_end()));
        push_section(&mut lines, "Development areas", &report.development_areas);

        let general = &report.interpretations.general;
        lines.push(format!(
            "\nInterpretation ({} {})",
            general.primary.intensity.label(),
            general.primary.title
        ));
        lines.push(general.primary.text.description.to_string());
        lines.push(general.secondary.text.description.to_string());
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("\n{title}"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use disc_profile::scoring::{Answer, ProfileScorer};

    fn dominant_result() -> ProfileResult {
        let answers: Vec<Answer> = (1u32..=4).map(|id| Answer::new(id, "D", "I")).collect();
        ProfileScorer::default()
            .score(&answers)
            .expect("answers score")
    }

    #[test]
    fn text_summary_lists_scores_and_content() {
        let result = dominant_result();
        let rendered = render_profile(&result, None);

        assert!(rendered.starts_with("DISC profile DS (Dominance / Steadiness)"));
        assert!(rendered.contains("- D Dominance: 25/25 (raw +4, High)"));
        assert!(rendered.contains("- I Influence: 1/25 (raw -4, Low)"));
        assert!(rendered.contains("\nRecommendations\n"));
        assert!(!rendered.contains("Input notices"));
        assert!(!rendered.contains("Development areas"));
        assert!(!rendered.contains("Interpretation"));
    }

    #[test]
    fn text_summary_appends_report_and_notices() {
        let mut answers: Vec<Answer> = (1u32..=3).map(|id| Answer::new(id, "S", "C")).collect();
        answers.push(Answer::new(4u32, "S", "S"));
        let result = ProfileScorer::default()
            .score(&answers)
            .expect("answers score");
        let report = ProfileReport::from_result(&result);

        let rendered = render_profile(&result, Some(&report));

        assert!(rendered.contains("Input notices"));
        assert!(rendered.contains("question 4: most and least both select S"));
        assert!(rendered.contains("Development areas"));
        assert!(rendered.contains("predominantly Steadiness (S)"));
        assert!(rendered.contains("\nInterpretation (High Steadiness)\n"));
    }
}
