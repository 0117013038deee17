use cube_words::{CandidateSet, CubeError, Dictionary};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cube_words_{}_{}", std::process::id(), name))
}

fn candidates(words: &[&str]) -> CandidateSet {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_parse_normalizes_words() {
    let dictionary = Dictionary::parse("Casa\nCASA\n\n  mare \r\nsole\n");
    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("casa"));
    assert!(dictionary.contains("mare"));
    assert!(!dictionary.contains("CASA"));
    assert!(!dictionary.contains(""));
}

#[test]
fn test_load_from_file() {
    let path = temp_path("dictionary.txt");
    fs::write(&path, "Pane\nvino\nPANE\n").unwrap();

    let dictionary = Dictionary::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert!(dictionary.contains("pane"));
}

#[test]
fn test_missing_dictionary() {
    let path = temp_path("does_not_exist.txt");
    match Dictionary::load(&path) {
        Err(CubeError::DictionaryNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected DictionaryNotFound, got {:?}", other),
    }
}

#[test]
fn test_matches_are_sorted() {
    let dictionary = Dictionary::from_words(["ca", "ad", "zz", "bd"]);
    let found = dictionary.matches(&candidates(&["ca", "db", "bd", "ad", "ac"]));
    assert_eq!(found, vec!["ad", "bd", "ca"]);
}

#[test]
fn test_filter_normalizes_case_and_duplicates() {
    let dictionary = Dictionary::from_words(["uno", "due"]);
    let found = dictionary.filter(["DUE", "uno", "Uno", "tre"]);
    assert_eq!(found, vec!["due", "uno"]);
}

#[test]
fn test_filter_is_idempotent() {
    let dictionary = Dictionary::from_words(["ape", "due", "kit", "nip"]);
    let once = dictionary.matches(&candidates(&["ape", "kit", "tik", "nip", "pin"]));
    let twice = dictionary.filter(once.iter().map(String::as_str));
    assert_eq!(once, twice);
}

#[test]
fn test_empty_inputs() {
    let dictionary = Dictionary::default();
    assert!(dictionary.is_empty());
    assert!(dictionary.matches(&candidates(&["abc"])).is_empty());

    let dictionary = Dictionary::from_words(["abc"]);
    assert!(dictionary.matches(&CandidateSet::new()).is_empty());
}
