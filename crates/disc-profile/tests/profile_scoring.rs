use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use disc_profile::scoring::sheet::{parse_answers_json, read_answers_path};
use disc_profile::scoring::{
    AssessmentService, Diagnostic, InMemoryResultRepository, Intensity, Level, ProfileReport,
    ProfileScorer, ScoringError, TokenMap, TokenMapError, TokenMapSource, TraitKey,
};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("disc-profile-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir created");
    let path = dir.join(name);
    fs::write(&path, contents).expect("scratch file written");
    path
}

#[test]
fn scores_a_keyed_quiz_submission_end_to_end() {
    let answers = parse_answers_json(
        r#"{
            "1": {"mais": "A", "menos": "D"},
            "2": {"mais": "A", "menos": "C"},
            "3": {"mais": "B", "menos": "D"},
            "4": {"mais": "A", "menos": "D"}
        }"#,
    )
    .expect("keyed answers parse");

    let scorer = ProfileScorer::new(TokenMap::column_letters());
    let (result, report) = scorer.score_with_report(&answers).expect("answers score");

    // D: 3 most, I: 1 most, S: 1 least, C: 3 least over four answers.
    assert_eq!(result.raw_scores[TraitKey::Dominance], 3);
    assert_eq!(result.raw_scores[TraitKey::Conformity], -3);
    assert_eq!(result.normalized_scores[TraitKey::Dominance], 22);
    assert_eq!(result.normalized_scores[TraitKey::Influence], 16);
    assert_eq!(result.normalized_scores[TraitKey::Steadiness], 10);
    assert_eq!(result.normalized_scores[TraitKey::Conformity], 4);
    assert_eq!(result.levels[TraitKey::Conformity], Level::Low);
    assert_eq!(result.profile, "DI");

    // C is low, so its weaknesses appear after the D block.
    assert_eq!(result.weaknesses.len(), 6);
    assert!(report.summary.contains("Influence (I) as secondary"));
}

#[test]
fn word_token_map_loaded_from_file_drives_scoring() {
    let map_path = scratch_file(
        "words.json",
        r#"{
            "symbols": {"d": "D", "i": "I", "s": "S", "c": "C"},
            "words": {
                "1": {"Determined": "D", "Persuasive": "I", "Patient": "S", "Precise": "C"},
                "2": {"Bold": "D", "Lively": "I", "Loyal": "S", "Careful": "C"}
            }
        }"#,
    );

    let tokens = TokenMapSource::parse(map_path.to_string_lossy().as_ref())
        .load()
        .expect("token map loads");
    let answers = parse_answers_json(
        r#"[
            {"questionId": 1, "most": " Patient ", "least": "Determined"},
            {"questionId": 2, "most": "Loyal", "least": "Bold"},
            {"questionId": 3, "most": "s", "least": "Unknown"}
        ]"#,
    )
    .expect("answers parse");

    let result = ProfileScorer::new(tokens)
        .score(&answers)
        .expect("answers score");

    assert_eq!(result.raw_scores[TraitKey::Steadiness], 3);
    assert_eq!(result.raw_scores[TraitKey::Dominance], -2);
    assert_eq!(result.primary, TraitKey::Steadiness);
    assert!(matches!(
        result.diagnostics.as_slice(),
        [Diagnostic::UnknownToken { token, .. }] if token == "Unknown"
    ));
}

#[test]
fn csv_answer_files_are_scored() {
    let path = scratch_file(
        "answers.csv",
        "question_id,most,least\n1,I,C\n2,I,D\n3,S,C\n",
    );

    let answers = read_answers_path(&path).expect("csv answers load");
    let result = ProfileScorer::default()
        .score(&answers)
        .expect("answers score");

    assert_eq!(result.answer_count, 3);
    assert_eq!(result.primary, TraitKey::Influence);
    assert_eq!(result.secondary, TraitKey::Steadiness);

    let report = ProfileReport::from_result(&result);
    assert_eq!(report.development_areas.len(), 2);
}

#[test]
fn empty_submission_yields_no_scores() {
    let answers = parse_answers_json("[]").expect("empty list parses");
    let err = ProfileScorer::default()
        .score(&answers)
        .expect_err("empty input rejected");
    assert_eq!(err, ScoringError::EmptyInput);
}

#[test]
fn token_map_files_must_define_tokens() {
    let path = scratch_file("empty-map.json", r#"{"symbols": {}, "words": {}}"#);
    let err = TokenMap::from_path(&path).expect_err("empty map rejected");
    assert!(matches!(err, TokenMapError::Empty));

    let missing = TokenMapSource::File(PathBuf::from("/nonexistent/disc-map.json")).load();
    assert!(matches!(missing, Err(TokenMapError::Io { .. })));
}

#[test]
fn stored_assessments_keep_answers_and_interpretations() {
    let answers = parse_answers_json(
        r#"[
            {"questionId": 1, "most": "C", "least": "I"},
            {"questionId": 2, "most": "C", "least": "D"},
            {"questionId": 3, "most": "S", "least": "I"}
        ]"#,
    )
    .expect("answers parse");
    let service = AssessmentService::new(
        Arc::new(ProfileScorer::default()),
        Arc::new(InMemoryResultRepository::default()),
    );

    let stored = service.record(answers, None).expect("answers score");
    let fetched = service.get(&stored.id).expect("stored result found");
    let report = ProfileReport::from_result(&fetched.result);

    // C: +2 over three answers normalizes to 21.
    assert_eq!(fetched.result.primary, TraitKey::Conformity);
    assert_eq!(fetched.answers.len(), 3);
    let primary = report.interpretations.general.primary;
    assert_eq!(primary.score, 21);
    assert_eq!(primary.intensity, Intensity::High);
    assert_eq!(report.interpretations.general.secondary.key, TraitKey::Steadiness);
}
