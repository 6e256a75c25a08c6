use condense::ai::response::extract_json;
use condense::core::models::Sections;
use condense::errors::SummarizeError;
use serde_json::json;

#[test]
fn test_direct_parse() {
    let value = extract_json(r#"{"summary": "x", "key_takeaways": ["a", "b"]}"#).unwrap();
    assert_eq!(value["summary"], "x");
    assert_eq!(value["key_takeaways"].as_array().unwrap().len(), 2);
}

#[test]
fn test_fenced_json_parses_like_unfenced() {
    let bare = r#"{"summary": "fenced", "key_takeaways": []}"#;
    let fenced = format!("```json\n{bare}\n```");
    assert_eq!(extract_json(&fenced).unwrap(), extract_json(bare).unwrap());
}

#[test]
fn test_fence_without_language_tag() {
    let wrapped = "```\n{\"summary\": \"plain fence\", \"key_takeaways\": []}\n```";
    let value = extract_json(wrapped).unwrap();
    assert_eq!(value["summary"], "plain fence");
}

#[test]
fn test_uppercase_fence_tag() {
    let wrapped = "```JSON\n{\"summary\": \"loud fence\", \"key_takeaways\": []}\n```";
    let value = extract_json(wrapped).unwrap();
    assert_eq!(value["summary"], "loud fence");
}

#[test]
fn test_brace_extraction_from_noisy_response() {
    let noisy = r#"Sure, here is the JSON you asked for:
{"summary": "extracted", "key_takeaways": ["one"]}
Hope that helps!"#;
    let value = extract_json(noisy).unwrap();
    assert_eq!(value["summary"], "extracted");
}

#[test]
fn test_single_quote_repair() {
    let value = extract_json(r#"{'summary': 'x', 'key_takeaways': []}"#).unwrap();
    assert_eq!(value["summary"], "x");
    assert!(value["key_takeaways"].as_array().unwrap().is_empty());
}

#[test]
fn test_empty_response_is_a_parse_error() {
    for input in ["", "   \n  "] {
        match extract_json(input) {
            Err(SummarizeError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn test_unrecoverable_garbage_is_a_parse_error() {
    match extract_json("the model forgot to answer in JSON") {
        Err(SummarizeError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_null_takeaways_normalize_to_empty() {
    let sections = Sections::from_value(&json!({"summary": "s", "key_takeaways": null}));
    assert_eq!(sections.summary, "s");
    assert!(sections.key_takeaways.is_empty());
}

#[test]
fn test_missing_keys_default() {
    let sections = Sections::from_value(&json!({}));
    assert_eq!(sections.summary, "");
    assert!(sections.key_takeaways.is_empty());
}

#[test]
fn test_non_list_takeaways_normalize_to_empty() {
    let sections = Sections::from_value(&json!({"summary": "s", "key_takeaways": "not a list"}));
    assert!(sections.key_takeaways.is_empty());
}

#[test]
fn test_non_string_takeaway_items_are_stringified() {
    let sections = Sections::from_value(&json!({"key_takeaways": [1, "two", true]}));
    assert_eq!(sections.key_takeaways, vec!["1", "two", "true"]);
}
