//! Tests for response collection.

use super::{Alignment, align, collect, fill_defaults, parse_pair};
use crate::error::PromptFormError;
use crate::model::CliModel;
use crate::prompt::Input;
use std::collections::{BTreeMap, HashMap};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_collect_in_order() {
    let submission = HashMap::from([("1", "a"), ("2", "b")]);
    assert_eq!(collect(submission), strings(&["a", "b"]));
}

#[test]
fn test_collect_order_independent_of_iteration() {
    let submission = vec![("3", "c"), ("1", "a"), ("2", "b")];
    assert_eq!(collect(submission), strings(&["a", "b", "c"]));
}

#[test]
fn test_collect_fills_gaps_with_empty_strings() {
    let submission = HashMap::from([("2", "b")]);
    assert_eq!(collect(submission), strings(&["", "b"]));

    let submission = BTreeMap::from([("1", "a"), ("4", "d")]);
    assert_eq!(collect(submission), strings(&["a", "", "", "d"]));
}

#[test]
fn test_collect_ignores_non_positional_keys() {
    let submission = vec![
        ("submit", "submit"),
        ("0", "zero"),
        ("-1", "negative"),
        ("1.5", "fraction"),
        ("", "empty"),
        ("1", "a"),
    ];
    assert_eq!(collect(submission), strings(&["a"]));
}

#[test]
fn test_collect_trims_keys() {
    let submission = vec![(" 2 ", "b")];
    assert_eq!(collect(submission), strings(&["", "b"]));
}

#[test]
fn test_collect_empty_submission() {
    let submission: Vec<(String, String)> = Vec::new();
    assert!(collect(submission).is_empty());
}

#[test]
fn test_collect_last_duplicate_wins() {
    let submission = vec![("1", "first"), ("01", "second")];
    assert_eq!(collect(submission), strings(&["second"]));
}

#[test]
fn test_parse_pair() {
    assert_eq!(
        parse_pair("1=Bob").unwrap(),
        ("1".to_string(), "Bob".to_string())
    );
    assert_eq!(
        parse_pair("2=a=b").unwrap(),
        ("2".to_string(), "a=b".to_string())
    );
    assert_eq!(parse_pair("3=").unwrap(), ("3".to_string(), String::new()));
}

#[test]
fn test_parse_pair_without_equals_is_user_error() {
    let err = parse_pair("Bob").unwrap_err();
    assert!(matches!(err, PromptFormError::UserError(_)));
    assert!(err.to_string().contains("KEY=VALUE"));
}

#[test]
fn test_align_pads_short_sequences() {
    let alignment = align(strings(&["a"]), 3);
    assert_eq!(
        alignment,
        Alignment {
            responses: strings(&["a", "", ""]),
            padded: 2,
            surplus: 0,
        }
    );
}

#[test]
fn test_align_reports_surplus_without_truncating() {
    let alignment = align(strings(&["a", "b", "c"]), 2);
    assert_eq!(alignment.responses, strings(&["a", "b", "c"]));
    assert_eq!(alignment.padded, 0);
    assert_eq!(alignment.surplus, 1);
}

#[test]
fn test_fill_defaults_uses_placeholders_for_empty_answers() {
    let model = CliModel::new(
        vec![
            Input::new("Name :", "Bob"),
            Input::new("Age:", ""),
            Input::new("City:", "Seattle"),
        ],
        "",
        "",
    );
    let mut responses = strings(&["", "", "Paris"]);
    fill_defaults(&mut responses, &model);
    assert_eq!(responses, strings(&["Bob", "", "Paris"]));
}

#[test]
fn test_collect_ignores_keys_above_limit() {
    let too_far = (super::MAX_POSITION + 1).to_string();
    let submission = vec![("1", "a".to_string()), (too_far.as_str(), "x".to_string())];
    assert_eq!(collect(submission), strings(&["a"]));
}
