//! ResultPair tests

use pairfinder::*;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_pair_new_ordered() {
    let pair = ResultPair::new(0, 1).unwrap();
    assert_eq!(pair.first(), 0);
    assert_eq!(pair.second(), 1);
}

#[test]
fn test_pair_new_rejects_unordered() {
    let err = ResultPair::new(5, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid pair: first index 5 must be less than second index 2"
    );
}

#[test]
fn test_pair_tuple_conversions() {
    let pair = ResultPair::try_from((2, 9)).unwrap();
    let (first, second): (usize, usize) = pair.into();
    assert_eq!((first, second), (2, 9));
    assert!(ResultPair::try_from((9, 9)).is_err());
}

#[test]
fn test_pair_display() {
    assert_eq!(ResultPair::new(1, 3).unwrap().to_string(), "(1, 3)");
}

#[test]
fn test_found_pair_never_reuses_an_index() {
    let pair = find(&[0, 0, 0], 0).unwrap();
    assert!(pair.first() < pair.second());
    assert_eq!(pair.indices(), (0, 1));
}

// ═══════════════════════════════════════════════════════════════════════
// JSON
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_pair_serializes_as_array() {
    let pair = find(&[1, 2, 3, 4, 5], 6).unwrap();
    assert_eq!(serde_json::to_string(&pair).unwrap(), "[1,3]");
}

#[test]
fn test_pair_deserializes_from_array() {
    let pair: ResultPair = serde_json::from_str("[0, 4]").unwrap();
    assert_eq!(pair.indices(), (0, 4));
}

#[test]
fn test_pair_deserialize_rejects_unordered() {
    let result: serde_json::Result<ResultPair> = serde_json::from_str("[4, 0]");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("must be less than"), "{message}");
}

#[test]
fn test_pair_deserialize_rejects_wrong_length() {
    assert!(serde_json::from_str::<ResultPair>("[]").is_err());
    assert!(serde_json::from_str::<ResultPair>("[1, 2, 3]").is_err());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Answer(#[serde(with = "pairfinder::pair::optional")] Option<ResultPair>);

#[test]
fn test_missing_pair_serializes_as_empty_array() {
    let answer = Answer(find(&[3], 6));
    assert_eq!(serde_json::to_string(&answer).unwrap(), "[]");
}

#[test]
fn test_found_pair_serializes_as_array_through_adapter() {
    let answer = Answer(find(&[3, 3], 6));
    assert_eq!(serde_json::to_string(&answer).unwrap(), "[0,1]");
}

#[test]
fn test_adapter_reads_both_shapes() {
    let empty: Answer = serde_json::from_str("[]").unwrap();
    assert_eq!(empty, Answer(None));

    let pair: Answer = serde_json::from_str("[1, 3]").unwrap();
    assert_eq!(pair, Answer(Some(ResultPair::new(1, 3).unwrap())));
}

#[test]
fn test_adapter_rejects_bad_shapes() {
    assert!(serde_json::from_str::<Answer>("[7]").is_err());
    assert!(serde_json::from_str::<Answer>("[3, 1]").is_err());
    assert!(serde_json::from_str::<Answer>("null").is_err());
}
