// WHY: Suffix rules for single-word noun plurals
// Rules match on the folded word but splice onto the original, so the stem keeps its casing

use super::classify::is_vowel_byte;
use super::lexicon::Lexicon;
use super::{fold_same_length, splice};

/// Pluralize a single word ("sword" -> "swords") using the built-in lexicon
///
/// Only works on single words with no spaces; use
/// [`pluralize_noun_phrase`](super::pluralize_noun_phrase) for phrases.
pub fn pluralize_noun(singular: &str, count: i64) -> String {
    pluralize_noun_with(Lexicon::builtin_nouns(), singular, count)
}

/// Pluralize a single word against a caller-supplied irregular table
pub fn pluralize_noun_with(nouns: &Lexicon, singular: &str, count: i64) -> String {
    if singular.len() < 2 || count == 1 {
        return singular.to_string();
    }

    let Some(lower) = fold_same_length(singular, "pluralize_noun") else {
        return singular.to_string();
    };

    if let Some(plural) = nouns.get(&lower) {
        return plural.to_string();
    }

    apply_rules(singular, lower.as_bytes()).unwrap_or_else(|| singular.to_string())
}

/// First matching rule wins; the order is the tie-break
fn apply_rules(singular: &str, lower: &[u8]) -> Option<String> {
    let n = lower.len();
    let last = lower[n - 1];
    let last_two = &lower[n - 2..];

    // -ss, -sh, -ch, -x, -o, -z: add -es
    if matches!(last_two, b"ss" | b"sh" | b"ch") || matches!(last, b'x' | b'o' | b'z') {
        return splice(singular, 0, "es");
    }

    // -fe: knife -> knives
    if last_two == b"fe" {
        return splice(singular, 2, "ves");
    }

    // -f but not -ff: loaf -> loaves, bluff -> bluffs
    if last == b'f' && last_two != b"ff" {
        return splice(singular, 1, "ves");
    }

    if last == b'y' {
        return if is_vowel_byte(last_two[0]) {
            splice(singular, 0, "s")
        } else {
            splice(singular, 1, "ies")
        };
    }

    // -us: terminus -> termini
    if last_two == b"us" {
        return splice(singular, 2, "i");
    }

    // -is: ellipsis -> ellipses
    if last_two == b"is" {
        return splice(singular, 2, "es");
    }

    if last == b's' {
        return splice(singular, 0, "es");
    }

    splice(singular, 0, "s")
}
