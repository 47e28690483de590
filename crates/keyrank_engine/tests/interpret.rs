use keyrank_engine::{
    extract_payload, parse_analysis, InterpretError, Keyword, Priority, Score, MAX_KEY_PHRASES,
};
use pretty_assertions::assert_eq;

#[test]
fn fenced_json_payload_is_extracted() {
    assert_eq!(extract_payload("```json\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn untagged_fence_is_extracted() {
    assert_eq!(extract_payload("```\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn fence_inside_prose_is_found() {
    let raw = "Here is the result you asked for:\n```json\n{\"a\":1}\n```\nLet me know!";
    assert_eq!(extract_payload(raw), "{\"a\":1}");
}

#[test]
fn unterminated_fence_takes_the_remainder() {
    assert_eq!(extract_payload("```json\n{\"a\":1}"), "{\"a\":1}");
}

#[test]
fn plain_payload_passes_through_trimmed() {
    assert_eq!(extract_payload("  {\"a\":1}\n"), "{\"a\":1}");
}

#[test]
fn parse_error_preserves_the_offending_text() {
    let err = parse_analysis("not json").unwrap_err();
    match err {
        InterpretError::Parse { text, .. } => assert_eq!(text, "not json"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_key_phrases_is_a_shape_error() {
    let err = parse_analysis("{\"a\":1}").unwrap_err();
    assert!(matches!(err, InterpretError::Shape { .. }));
}

#[test]
fn unknown_priority_is_a_shape_error() {
    let raw = r#"{"keyPhrases":[{"phrase":"x","priority":"URGENT","keywords":[]}]}"#;
    let err = parse_analysis(raw).unwrap_err();
    assert!(matches!(err, InterpretError::Shape { .. }));
}

#[test]
fn scores_accept_numbers_and_strings() {
    let raw = r#"{"keyPhrases":[{"phrase":"x","priority":"LOW","keywords":[
        {"word":"Go","score":9},
        {"word":"Rust","score":"8.5"}
    ]}]}"#;
    let analysis = parse_analysis(raw).expect("parse ok");

    assert_eq!(
        analysis.key_phrases[0].keywords,
        vec![
            Keyword {
                word: "Go".to_string(),
                score: Score::Number(9.0),
            },
            Keyword {
                word: "Rust".to_string(),
                score: Score::Text("8.5".to_string()),
            },
        ]
    );
}

#[test]
fn missing_score_degrades_to_zero() {
    let raw = r#"{"keyPhrases":[{"phrase":"x","priority":"MEDIUM","keywords":[{"word":"Go"}]}]}"#;
    let analysis = parse_analysis(raw).expect("parse ok");

    assert_eq!(
        analysis.key_phrases[0].keywords[0].score,
        Score::Number(0.0)
    );
}

#[test]
fn missing_keywords_degrades_to_empty() {
    let raw = r#"{"keyPhrases":[{"phrase":"x","priority":"HIGH"}]}"#;
    let analysis = parse_analysis(raw).expect("parse ok");

    assert_eq!(analysis.key_phrases[0].priority, Priority::High);
    assert!(analysis.key_phrases[0].keywords.is_empty());
}

#[test]
fn oversized_reply_is_truncated_to_the_cap() {
    let phrases = (0..12)
        .map(|index| {
            serde_json::json!({
                "phrase": format!("phrase {index}"),
                "priority": "LOW",
                "keywords": []
            })
        })
        .collect::<Vec<_>>();
    let raw = serde_json::json!({ "keyPhrases": phrases }).to_string();

    let analysis = parse_analysis(&raw).expect("parse ok");

    assert_eq!(analysis.key_phrases.len(), MAX_KEY_PHRASES);
    assert_eq!(analysis.key_phrases[0].phrase, "phrase 0");
}

#[test]
fn score_display_drops_integral_fraction() {
    assert_eq!(Score::Number(9.0).to_string(), "9");
    assert_eq!(Score::Number(8.5).to_string(), "8.5");
    assert_eq!(Score::Text("high".to_string()).to_string(), "high");
}
