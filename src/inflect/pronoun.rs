// WHY: Pronoun agreement for generated text about characters of any gender

use serde::{Deserialize, Serialize};

/// Pluralize a pronoun; only "it" changes ("it" -> "them")
pub fn pluralize_pronoun(singular: &str, count: i64) -> String {
    if count != 1 && singular.eq_ignore_ascii_case("it") {
        "them".to_string()
    } else {
        singular.to_string()
    }
}

/// Grammatical gender of the character being described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Neutral,
    Masculine,
    Feminine,
    Plural,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Neutral,
        Gender::Masculine,
        Gender::Feminine,
        Gender::Plural,
    ];

    /// Map a stored gender index to a variant, clamping out-of-range values
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.clamp(0, Self::ALL.len() as i64 - 1) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Neutral => "neutral",
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Plural => "plural",
        }
    }

    /// Subject pronoun: it / he / she / they
    pub fn personal(self) -> &'static str {
        match self {
            Gender::Neutral => "it",
            Gender::Masculine => "he",
            Gender::Feminine => "she",
            Gender::Plural => "they",
        }
    }

    /// Object pronoun: it / him / her / them
    pub fn objective(self) -> &'static str {
        match self {
            Gender::Neutral => "it",
            Gender::Masculine => "him",
            Gender::Feminine => "her",
            Gender::Plural => "them",
        }
    }

    /// Possessive before a noun: its / his / her / their
    pub fn possessive_determiner(self) -> &'static str {
        match self {
            Gender::Neutral => "its",
            Gender::Masculine => "his",
            Gender::Feminine => "her",
            Gender::Plural => "their",
        }
    }

    /// Standalone possessive: its / his / hers / theirs
    pub fn possessive_pronoun(self) -> &'static str {
        match self {
            Gender::Neutral => "its",
            Gender::Masculine => "his",
            Gender::Feminine => "hers",
            Gender::Plural => "theirs",
        }
    }

    pub fn reflexive(self) -> &'static str {
        match self {
            Gender::Neutral => "itself",
            Gender::Masculine => "himself",
            Gender::Feminine => "herself",
            Gender::Plural => "themselves",
        }
    }

    /// Whether a verb following this character's pronoun takes the plural form
    pub fn requires_plural_verb(self) -> bool {
        self == Gender::Plural
    }
}
