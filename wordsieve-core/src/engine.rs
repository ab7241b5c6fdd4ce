// wordsieve-core/src/engine.rs
//! The noise-tolerant scanning algorithm and the query operations built on it.
//!
//! Every query runs the same left-to-right scan. For each anchor position the engine
//! walks the trie forward, skipping noise characters without moving the trie pointer,
//! and keeps extending past terminal nodes so that the longest word starting at the
//! anchor wins. The next search starts at the end of the previous match, so spans never
//! overlap.
//!
//! What happens at each match is decided by a [`MatchSink`]: find-all collects, filter
//! deduplicates, validate stops at the first hit and replace masks consumed positions.
//!
//! The engine works on text that has already been normalized by the same
//! [`crate::Normalizer`] used at insertion time; it never folds characters itself.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::classifier::CharacterClassifier;
use crate::trie::{Trie, TrieNode};
use crate::word_match::{log_match_debug, Validation, WordMatch};

/// Receives matches in order as the scan produces them.
pub trait MatchSink {
    /// Called once per match. Returning `Break` ends the scan.
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()>;
}

impl<F> MatchSink for F
where
    F: FnMut(WordMatch) -> ControlFlow<()>,
{
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()> {
        self(m)
    }
}

/// Collects every matched word, duplicates included.
#[derive(Debug, Default)]
pub struct FindAllSink {
    pub words: Vec<String>,
}

impl MatchSink for FindAllSink {
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()> {
        self.words.push(m.word);
        ControlFlow::Continue(())
    }
}

/// Collects distinct matched words in first-seen order.
#[derive(Debug, Default)]
pub struct FilterSink {
    seen: HashSet<String>,
    pub words: Vec<String>,
}

impl MatchSink for FilterSink {
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()> {
        if self.seen.insert(m.word.clone()) {
            self.words.push(m.word);
        }
        ControlFlow::Continue(())
    }
}

/// Keeps the first match and stops.
#[derive(Debug, Default)]
pub struct FirstMatchSink {
    pub first: Option<WordMatch>,
}

impl MatchSink for FirstMatchSink {
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()> {
        self.first = Some(m);
        ControlFlow::Break(())
    }
}

/// Overwrites consumed positions of the original text with a mask character.
#[derive(Debug)]
pub struct MaskSink {
    out: Vec<char>,
    mask: char,
}

impl MaskSink {
    pub fn new(original: &str, mask: char) -> Self {
        Self {
            out: original.chars().collect(),
            mask,
        }
    }

    pub fn into_string(self) -> String {
        self.out.into_iter().collect()
    }
}

impl MatchSink for MaskSink {
    fn on_match(&mut self, m: WordMatch) -> ControlFlow<()> {
        for &p in &m.positions {
            if let Some(slot) = self.out.get_mut(p) {
                *slot = self.mask;
            }
        }
        ControlFlow::Continue(())
    }
}

/// Borrowed view of a trie plus the noise policy, ready to scan text.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    root: &'a TrieNode,
    classifier: &'a CharacterClassifier,
    max_skip_run: Option<usize>,
}

impl<'a> MatchEngine<'a> {
    pub fn new(trie: &'a Trie, classifier: &'a CharacterClassifier) -> Self {
        Self {
            root: trie.root(),
            classifier,
            max_skip_run: None,
        }
    }

    /// Bounds the number of consecutive noise characters tolerated inside a match.
    pub fn with_max_skip_run(mut self, max_skip_run: Option<usize>) -> Self {
        self.max_skip_run = max_skip_run;
        self
    }

    /// The longest match that starts exactly at `anchor`, if any.
    ///
    /// Noise characters never start a match, and trailing noise after the last consumed
    /// character is not part of the span.
    pub fn match_at(&self, text: &[char], anchor: usize) -> Option<WordMatch> {
        let first = *text.get(anchor)?;
        if self.classifier.is_skippable(first) {
            return None;
        }

        let mut node = self.root;
        let mut consumed: Vec<usize> = Vec::new();
        let mut longest = 0usize;
        let mut skip_run = 0usize;

        for (j, &c) in text.iter().enumerate().skip(anchor) {
            if self.classifier.is_skippable(c) {
                skip_run += 1;
                if self.max_skip_run.is_some_and(|limit| skip_run > limit) {
                    break;
                }
                continue;
            }
            skip_run = 0;
            match node.child(c) {
                Some(next) => {
                    node = next;
                    consumed.push(j);
                    if node.is_end_of_word() {
                        longest = consumed.len();
                    }
                    if !node.has_children() {
                        break;
                    }
                }
                None => break,
            }
        }

        if longest == 0 {
            return None;
        }
        consumed.truncate(longest);
        let end = consumed[longest - 1] + 1;
        let word: String = consumed.iter().map(|&p| text[p]).collect();
        Some(WordMatch {
            word,
            start: anchor,
            end,
            positions: consumed,
        })
    }

    /// The first match starting at or after `from`.
    pub fn next_match(&self, text: &[char], from: usize) -> Option<WordMatch> {
        (from..text.len()).find_map(|anchor| self.match_at(text, anchor))
    }

    /// Lazily iterates over non-overlapping matches in order of start position.
    pub fn matches<'t>(&self, text: &'t [char]) -> Matches<'a, 't> {
        Matches {
            engine: *self,
            text,
            next_from: 0,
        }
    }

    /// Runs one scan over `text`, feeding each match to `sink` until it breaks.
    pub fn scan<S: MatchSink + ?Sized>(&self, text: &[char], sink: &mut S) {
        for m in self.matches(text) {
            log_match_debug(module_path!(), &m);
            if sink.on_match(m).is_break() {
                break;
            }
        }
    }

    pub fn find_all(&self, text: &[char]) -> Vec<String> {
        let mut sink = FindAllSink::default();
        self.scan(text, &mut sink);
        sink.words
    }

    pub fn filter(&self, text: &[char]) -> Vec<String> {
        let mut sink = FilterSink::default();
        self.scan(text, &mut sink);
        sink.words
    }

    pub fn validate(&self, text: &[char]) -> Validation {
        let mut sink = FirstMatchSink::default();
        self.scan(text, &mut sink);
        match sink.first {
            Some(m) => Validation::dirty(m.word),
            None => Validation::clean(),
        }
    }

    /// Masks matches of `normalized` in `original`. Both must have the same number of
    /// code points, which holds whenever `normalized` came from a [`crate::Normalizer`].
    pub fn replace(&self, original: &str, normalized: &[char], mask: char) -> String {
        let mut sink = MaskSink::new(original, mask);
        self.scan(normalized, &mut sink);
        sink.into_string()
    }
}

/// Iterator returned by [`MatchEngine::matches`].
#[derive(Debug)]
pub struct Matches<'a, 't> {
    engine: MatchEngine<'a>,
    text: &'t [char],
    next_from: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = WordMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.engine.next_match(self.text, self.next_from)?;
        self.next_from = m.end;
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NoiseConfig;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.insert(&chars(w));
        }
        trie
    }

    #[test]
    fn test_find_all_in_order() {
        let trie = trie_of(&["bad", "word"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.find_all(&chars("this is a bad word")), vec!["bad", "word"]);
    }

    #[test]
    fn test_match_span_and_positions_with_noise() {
        let trie = trie_of(&["bad"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        let m = engine.next_match(&chars("x b.a..d."), 0).unwrap();
        assert_eq!(m.word, "bad");
        assert_eq!((m.start, m.end), (2, 8));
        assert_eq!(m.positions, vec![2, 4, 7]);
    }

    #[test]
    fn test_longest_match_wins() {
        let trie = trie_of(&["ab", "abc"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.find_all(&chars("abc")), vec!["abc"]);
        assert_eq!(engine.find_all(&chars("abd")), vec!["ab"]);
        assert_eq!(engine.find_all(&chars("a b c")), vec!["abc"]);
    }

    #[test]
    fn test_falls_back_to_shorter_word_when_extension_fails() {
        let trie = trie_of(&["ab", "abcd"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.find_all(&chars("abcx")), vec!["ab"]);
    }

    #[test]
    fn test_resumes_after_span_end() {
        let trie = trie_of(&["aa"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.find_all(&chars("aaa")), vec!["aa"]);
        assert_eq!(engine.find_all(&chars("aaaa")), vec!["aa", "aa"]);
    }

    #[test]
    fn test_overlapping_candidate_found_after_span() {
        let trie = trie_of(&["abc", "cde", "de"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.find_all(&chars("abcde")), vec!["abc", "de"]);
    }

    #[test]
    fn test_noise_never_starts_a_match() {
        let trie = trie_of(&["bad"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        let m = engine.next_match(&chars("  bad"), 0).unwrap();
        assert_eq!(m.start, 2);
    }

    #[test]
    fn test_max_skip_run() {
        let trie = trie_of(&["bad"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier).with_max_skip_run(Some(1));
        assert_eq!(engine.find_all(&chars("b a d")), vec!["bad"]);
        assert!(engine.find_all(&chars("b   a d")).is_empty());
    }

    #[test]
    fn test_strict_classifier_requires_contiguous_text() -> crate::errors::Result<()> {
        let trie = trie_of(&["bad"]);
        let classifier = CharacterClassifier::new(&NoiseConfig::strict())?;
        let engine = MatchEngine::new(&trie, &classifier);
        assert!(engine.find_all(&chars("b.a.d")).is_empty());
        assert_eq!(engine.find_all(&chars("xbadx")), vec!["bad"]);
        Ok(())
    }

    #[test]
    fn test_replace_masks_only_consumed_positions() {
        let trie = trie_of(&["bad", "word"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        let text = "a b-a-d word!";
        assert_eq!(engine.replace(text, &chars(text), '*'), "a *-*-* ****!");
    }

    #[test]
    fn test_filter_and_validate() {
        let trie = trie_of(&["bad", "word"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert_eq!(engine.filter(&chars("word bad bad word")), vec!["word", "bad"]);
        assert_eq!(engine.validate(&chars("all clean")), Validation::clean());
        assert_eq!(
            engine.validate(&chars("word then bad")),
            Validation::dirty("word".to_string())
        );
    }

    #[test]
    fn test_empty_text_and_empty_trie() {
        let trie = Trie::new();
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        assert!(engine.find_all(&chars("anything")).is_empty());
        assert_eq!(engine.replace("", &[], '*'), "");

        let trie = trie_of(&["bad"]);
        let engine = MatchEngine::new(&trie, &classifier);
        assert!(engine.find_all(&[]).is_empty());
    }

    #[test]
    fn test_closure_sink_can_stop_early() {
        let trie = trie_of(&["a"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        let mut seen = 0;
        engine.scan(&chars("a a a a"), &mut |_m: WordMatch| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_matches_iterator_is_restartable() {
        let trie = trie_of(&["bad"]);
        let classifier = CharacterClassifier::default();
        let engine = MatchEngine::new(&trie, &classifier);
        let text = chars("bad and bad");
        let first: Vec<_> = engine.matches(&text).collect();
        let second: Vec<_> = engine.matches(&text).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
