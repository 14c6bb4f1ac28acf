// WHY: Converse of the third-person -s/-es/-ies rules: "he parries" -> "they parry"

use super::classify::is_vowel_byte;
use super::lexicon::Lexicon;
use super::{fold_same_length, splice};
use tracing::warn;

/// Suffixes that took -es in the third person; dropping the -es restores the base
const ES_SUFFIXES: &[&str] = &["xes", "sses", "shes", "ches", "tches", "zzes"];

/// Convert a third-person singular verb to the form a plural subject takes
/// ("relaxes" -> "relax", "has" -> "have")
pub fn pluralize_verb(singular: &str) -> String {
    pluralize_verb_with(Lexicon::builtin_verbs(), singular)
}

/// Same as [`pluralize_verb`], against a caller-supplied irregular table
pub fn pluralize_verb_with(verbs: &Lexicon, singular: &str) -> String {
    if singular.len() < 2 {
        return singular.to_string();
    }

    let Some(lower) = fold_same_length(singular, "pluralize_verb") else {
        return singular.to_string();
    };

    if let Some(base) = verbs.get(&lower) {
        return base.to_string();
    }

    match apply_rules(singular, &lower) {
        Some(base) => base,
        None => {
            warn!(
                word = singular,
                "pluralize_verb: word wasn't in the dictionary and didn't follow the rules"
            );
            singular.to_string()
        }
    }
}

fn apply_rules(singular: &str, lower: &str) -> Option<String> {
    let bytes = lower.as_bytes();
    let n = bytes.len();

    // relaxes, blesses, bashes, wrenches, fuzzes: drop -es
    if ES_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return splice(singular, 2, "");
    }

    // consonant + ies: parries -> parry
    if n >= 4 && lower.ends_with("ies") && !is_vowel_byte(bytes[n - 4]) {
        return splice(singular, 3, "y");
    }

    // vowel + ys: assays -> assay
    if n >= 3 && lower.ends_with("ys") && is_vowel_byte(bytes[n - 3]) {
        return splice(singular, 1, "");
    }

    if lower.ends_with('s') {
        return splice(singular, 1, "");
    }

    None
}
