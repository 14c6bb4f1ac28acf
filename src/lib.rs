pub mod config;
pub mod inflect;
pub mod template;

// Re-export the pluralization API for convenient access
pub use inflect::{
    int_to_words, is_vowel, lookup_noun, lookup_verb, pluralize_noun, pluralize_noun_phrase,
    pluralize_pronoun, pluralize_verb, Gender, Lexicon, NounPhrase, Pluralizer,
};

// Re-export configuration and template helpers
pub use config::PluralityConfig;
pub use template::{agree_verb, expand_verbs, parse_option};
