// wordsieve-core/tests/scenario_tests.rs
use anyhow::Result;
use wordsieve_core::{Validation, Vocabulary};

fn bad_word_vocabulary() -> Vocabulary {
    Vocabulary::from_words(["bad", "word"])
}

#[test]
fn test_find_all_reports_words_in_order() {
    let vocabulary = bad_word_vocabulary();
    assert_eq!(vocabulary.find_all("this is a bad word"), vec!["bad", "word"]);
}

#[test]
fn test_replace_masks_matched_words() {
    let vocabulary = bad_word_vocabulary();
    assert_eq!(vocabulary.replace("this is a bad word"), "this is a *** ****");
}

#[test]
fn test_validate_clean_text() {
    let vocabulary = bad_word_vocabulary();
    assert_eq!(vocabulary.validate("this is clean"), Validation::clean());
}

#[test]
fn test_validate_reports_first_word() {
    let vocabulary = bad_word_vocabulary();
    let validation = vocabulary.validate("a word and a bad one");
    assert!(!validation.clean);
    assert_eq!(validation.word.as_deref(), Some("word"));
}

#[test]
fn test_filter_deduplicates_in_first_seen_order() {
    let vocabulary = bad_word_vocabulary();
    assert_eq!(vocabulary.filter("bad bad word"), vec!["bad", "word"]);
}

#[test]
fn test_obfuscated_match_through_noise() {
    let vocabulary = Vocabulary::from_words(["bad"]);
    assert_eq!(vocabulary.find_all("b.a.d"), vec!["bad"]);
    assert_eq!(vocabulary.replace("b.a.d"), "*.*.*");
}

#[test]
fn test_deleted_word_no_longer_matches() -> Result<()> {
    let vocabulary = bad_word_vocabulary();
    assert!(vocabulary.del_word("bad")?);
    assert_eq!(vocabulary.find_all("this is a bad word"), vec!["word"]);
    Ok(())
}

#[test]
fn test_cjk_words_with_noise() -> Result<()> {
    let vocabulary = Vocabulary::new();
    vocabulary.add_word("坏人")?;
    assert_eq!(vocabulary.find_all("他是个坏 人，真的是坏、人"), vec!["坏人", "坏人"]);
    assert_eq!(vocabulary.replace("他是个坏 人！"), "他是个* *！");
    Ok(())
}

#[test]
fn test_case_and_width_folding() {
    let vocabulary = Vocabulary::from_words(["BadWord"]);
    assert_eq!(vocabulary.find_all("ＢＡＤ word"), vec!["badword"]);
}

#[test]
fn test_longest_word_wins_over_prefix() {
    let vocabulary = Vocabulary::from_words(["ab", "abc"]);
    assert_eq!(vocabulary.find_all("abc"), vec!["abc"]);
    assert_eq!(vocabulary.find_all("ab c"), vec!["abc"]);
    assert_eq!(vocabulary.find_all("abx"), vec!["ab"]);
}

#[test]
fn test_empty_text() {
    let vocabulary = bad_word_vocabulary();
    assert!(vocabulary.find_all("").is_empty());
    assert!(vocabulary.filter("").is_empty());
    assert_eq!(vocabulary.replace(""), "");
    assert!(vocabulary.validate("").clean);
}

#[test]
fn test_match_may_span_the_gap_between_words() {
    // Whitespace is noise, so the tail of one word and the head of the next form a match.
    // The scan resumes after it, so a word sharing those characters is not reported.
    let vocabulary = Vocabulary::from_words(["ab", "bad"]);
    assert_eq!(vocabulary.find_all("a bad"), vec!["ab"]);
    assert_eq!(vocabulary.replace("a bad"), "* *ad");
    assert_eq!(vocabulary.find_all("the bad"), vec!["bad"]);
}
