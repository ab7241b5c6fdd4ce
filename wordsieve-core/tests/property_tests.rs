// wordsieve-core/tests/property_tests.rs
//! Invariants checked over a fixed corpus of texts and vocabulary edits.

use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use wordsieve_core::Vocabulary;

const WORDS: &[&str] = &["bad", "word", "ab", "abc", "坏人", "spam", "aa"];

const TEXTS: &[&str] = &[
    "",
    "this is a bad word",
    "b.a.d w o r d",
    "abcabcab",
    "aaaaa",
    "这是坏人，坏 人，坏、、人",
    "S-P-A-M and more spam!!",
    "nothing to see here",
    "   ...   ",
    "ＢＡＤ ＷＯＲＤ",
    "wordbadwordbad",
];

fn vocabulary() -> Vocabulary {
    Vocabulary::from_words(WORDS)
}

#[test]
fn test_replace_preserves_length() {
    let vocabulary = vocabulary();
    for text in TEXTS {
        let replaced = vocabulary.replace(text);
        assert_eq!(
            replaced.chars().count(),
            text.chars().count(),
            "length changed for {:?}",
            text
        );
    }
}

#[test]
fn test_replace_only_touches_matched_positions() {
    let vocabulary = vocabulary();
    for text in TEXTS {
        let masked: HashSet<usize> = vocabulary
            .find_matches(text)
            .into_iter()
            .flat_map(|m| m.positions)
            .collect();
        let replaced: Vec<char> = vocabulary.replace(text).chars().collect();
        for (i, original) in text.chars().enumerate() {
            if masked.contains(&i) {
                assert_eq!(replaced[i], '*');
            } else {
                assert_eq!(replaced[i], original, "position {} of {:?}", i, text);
            }
        }
    }
}

#[test]
fn test_filter_is_distinct_find_all() {
    let vocabulary = vocabulary();
    for text in TEXTS {
        let all = vocabulary.find_all(text);
        let mut seen = HashSet::new();
        let distinct: Vec<String> = all.into_iter().filter(|w| seen.insert(w.clone())).collect();
        assert_eq!(vocabulary.filter(text), distinct, "text {:?}", text);
    }
}

#[test]
fn test_validate_agrees_with_find_all() {
    let vocabulary = vocabulary();
    for text in TEXTS {
        let all = vocabulary.find_all(text);
        let validation = vocabulary.validate(text);
        assert_eq!(validation.clean, all.is_empty(), "text {:?}", text);
        assert_eq!(validation.word, all.first().cloned());
    }
}

#[test]
fn test_add_word_is_idempotent() -> Result<()> {
    let once = vocabulary();
    let twice = vocabulary();
    once.add_word("extra")?;
    twice.add_word("extra")?;
    twice.add_word("extra")?;
    assert_eq!(once.fingerprint(), twice.fingerprint());
    for text in TEXTS {
        assert_eq!(once.find_all(text), twice.find_all(text));
    }
    Ok(())
}

#[test]
fn test_add_then_delete_restores_behaviour() -> Result<()> {
    let vocabulary = vocabulary();
    let before: Vec<_> = TEXTS.iter().map(|t| vocabulary.find_all(t)).collect();
    for word in ["ord", "is", "坏", "thing"] {
        assert!(vocabulary.add_word(word)?);
        assert!(vocabulary.del_word(word)?);
    }
    let after: Vec<_> = TEXTS.iter().map(|t| vocabulary.find_all(t)).collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_concurrent_readers_and_writers() {
    let vocabulary = Arc::new(vocabulary());
    thread::scope(|scope| {
        for _ in 0..4 {
            let vocabulary = Arc::clone(&vocabulary);
            scope.spawn(move || {
                for _ in 0..200 {
                    for text in TEXTS {
                        let replaced = vocabulary.replace(text);
                        assert_eq!(replaced.chars().count(), text.chars().count());
                        let _ = vocabulary.validate(text);
                    }
                }
            });
        }
        let writer = Arc::clone(&vocabulary);
        scope.spawn(move || {
            for i in 0..200 {
                let word = format!("tmp{}", i);
                writer.add_word(&word).expect("valid word");
                writer.del_word(&word).expect("valid word");
            }
        });
    });
    assert_eq!(vocabulary.len(), WORDS.len());
    // "a b" across the word gap matches "ab" first, which consumes the "b" of "bad".
    assert_eq!(vocabulary.find_all("this is a bad word"), vec!["ab", "word"]);
}
