// WHY: Main pluralizer interface: free functions over the built-in lexicons, or a
// Pluralizer instance carrying caller-supplied irregular tables

use std::sync::OnceLock;
use tracing::warn;

pub mod classify;
pub mod lexicon;
pub mod noun;
pub mod numbers;
pub mod phrase;
pub mod pronoun;
pub mod verb;

// Re-export core operations
pub use classify::is_vowel;
pub use lexicon::{lookup_noun, lookup_verb, Lexicon};
pub use noun::pluralize_noun;
pub use numbers::int_to_words;
pub use phrase::{pluralize_noun_phrase, NounPhrase};
pub use pronoun::{pluralize_pronoun, Gender};
pub use verb::pluralize_verb;

/// Fold `word` to lowercase, refusing folds that change the byte length
///
/// Suffix positions found in the folded view are applied to the original,
/// so both must line up. This only catches length-changing folds; it is
/// not a general Unicode casing check.
pub(crate) fn fold_same_length(word: &str, caller: &str) -> Option<String> {
    let lower = word.to_lowercase();
    if lower.len() == word.len() {
        Some(lower)
    } else {
        warn!("{}: unsupported unicode in input {:?}", caller, word);
        None
    }
}

/// Drop `drop` trailing bytes from the original-case word and append `suffix`
/// Returns None when the cut would land inside a multi-byte character
pub(crate) fn splice(original: &str, drop: usize, suffix: &str) -> Option<String> {
    let stem = original.len().checked_sub(drop).and_then(|end| original.get(..end));
    match stem {
        Some(stem) => {
            let mut result = String::with_capacity(stem.len() + suffix.len());
            result.push_str(stem);
            result.push_str(suffix);
            Some(result)
        }
        None => {
            warn!(word = original, "suffix boundary splits a character, leaving word unchanged");
            None
        }
    }
}

static GLOBAL: OnceLock<Pluralizer> = OnceLock::new();

/// Noun and verb irregular tables plus the rule engine that falls back on them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pluralizer {
    nouns: Lexicon,
    verbs: Lexicon,
}

impl Pluralizer {
    /// Create a pluralizer with custom irregular tables (built-ins are not included)
    pub fn new(nouns: Lexicon, verbs: Lexicon) -> Self {
        Self { nouns, verbs }
    }

    /// Create a pluralizer with the built-in irregular tables
    pub fn with_builtin_lexicons() -> Self {
        Self::new(
            Lexicon::builtin_nouns().clone(),
            Lexicon::builtin_verbs().clone(),
        )
    }

    /// Shared process-wide instance over the built-in tables
    pub fn global() -> &'static Pluralizer {
        GLOBAL.get_or_init(Self::with_builtin_lexicons)
    }

    pub fn nouns(&self) -> &Lexicon {
        &self.nouns
    }

    pub fn verbs(&self) -> &Lexicon {
        &self.verbs
    }

    pub fn noun(&self, singular: &str, count: i64) -> String {
        noun::pluralize_noun_with(&self.nouns, singular, count)
    }

    pub fn noun_phrase(&self, phrase: &str, count: i64) -> String {
        phrase::pluralize_noun_phrase_with(&self.nouns, phrase, count)
    }

    pub fn verb(&self, singular: &str) -> String {
        verb::pluralize_verb_with(&self.verbs, singular)
    }

    /// Verb form that agrees with a subject of `count` items
    pub fn verb_for_count(&self, singular: &str, count: i64) -> String {
        if count == 1 {
            singular.to_string()
        } else {
            self.verb(singular)
        }
    }

    pub fn pronoun(&self, singular: &str, count: i64) -> String {
        pluralize_pronoun(singular, count)
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::with_builtin_lexicons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_splice_boundaries() {
        assert_eq!(splice("loaf", 1, "ves").as_deref(), Some("loaves"));
        assert_eq!(splice("sword", 0, "s").as_deref(), Some("swords"));
        assert_eq!(splice("a€", 1, "s"), None);
        assert_eq!(splice("a", 2, "s"), None);
    }

    #[test]
    fn test_fold_same_length() {
        assert_eq!(fold_same_length("GLAMDRING", "test").as_deref(), Some("glamdring"));
        assert_eq!(fold_same_length("İ", "test"), None);
    }

    #[test]
    fn test_global_matches_free_functions() {
        let p = Pluralizer::global();
        assert_eq!(p.noun("person", 2), pluralize_noun("person", 2));
        assert_eq!(p.noun_phrase("a bag of holding", 3), pluralize_noun_phrase("a bag of holding", 3));
        assert_eq!(p.verb("parries"), pluralize_verb("parries"));
        assert_eq!(p.pronoun("it", 2), "them");
    }

    #[test]
    fn test_verb_for_count() {
        let p = Pluralizer::default();
        assert_eq!(p.verb_for_count("swings", 1), "swings");
        assert_eq!(p.verb_for_count("swings", 3), "swing");
        assert_eq!(p.verb_for_count("is", 0), "are");
    }

    #[test]
    fn test_custom_tables_layered_over_builtin() {
        let mut nouns = Lexicon::builtin_nouns().clone();
        nouns.extend([("hoof", "hooves")]);
        let p = Pluralizer::new(nouns, Lexicon::new());
        assert_eq!(p.noun("hoof", 2), "hooves");
        assert_eq!(p.noun("person", 2), "people");
        // Empty verb table: irregulars fall through to the rules
        assert_eq!(p.verb("has"), "ha");
    }

    #[test]
    fn test_concurrent_readers() {
        let p = Arc::new(Pluralizer::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let p = Arc::clone(&p);
                thread::spawn(move || p.noun_phrase("a loaf of bread", i))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let expected = pluralize_noun_phrase("a loaf of bread", i as i64);
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
