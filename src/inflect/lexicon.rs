// WHY: Irregular forms override every suffix rule, so they live in their own lookup tables
// Built-in tables are constructed once per process and are read-only afterwards

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Built-in irregular noun plurals
/// Only entries the suffix rules get wrong belong here
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    // People
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("gentleman", "gentlemen"),
    ("townsman", "townsmen"),
    // Body parts
    ("foot", "feet"),
    ("tooth", "teeth"),
    // Animals
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("fish", "fish"),
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("moose", "moose"),
    ("swine", "swine"),
    ("bison", "bison"),
    ("giraffe", "giraffes"),
    ("kangaroo", "kangaroos"),
    // Words the -o rule would turn into -oes
    ("piano", "pianos"),
    ("photo", "photos"),
    ("radio", "radios"),
    ("video", "videos"),
    ("zoo", "zoos"),
    // Words the -f/-fe rules would mangle
    ("chief", "chiefs"),
    ("roof", "roofs"),
    ("belief", "beliefs"),
    ("chef", "chefs"),
    ("proof", "proofs"),
    ("reef", "reefs"),
    ("safe", "safes"),
    ("cafe", "cafes"),
    // -us words that are not Latin -i plurals
    ("bus", "buses"),
    ("bonus", "bonuses"),
    ("status", "statuses"),
    ("octopus", "octopuses"),
    ("walrus", "walruses"),
    ("corpus", "corpora"),
    ("genus", "genera"),
    // -ch pronounced /k/
    ("stomach", "stomachs"),
    ("monarch", "monarchs"),
    ("epoch", "epochs"),
    // Latin/Greek
    ("beau", "beaux"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("appendix", "appendices"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("datum", "data"),
    ("medium", "media"),
    // Doubled final z
    ("quiz", "quizzes"),
    // Fantasy staples
    ("die", "dice"),
    ("cyclops", "cyclopes"),
    ("djinni", "djinn"),
    ("gold", "gold"),
    ("bread", "bread"),
];

/// Built-in irregular verb bases, keyed by third-person singular form
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("is", "are"),
    ("isn't", "aren't"),
    ("was", "were"),
    ("wasn't", "weren't"),
    ("has", "have"),
    ("hasn't", "haven't"),
    ("does", "do"),
    ("doesn't", "don't"),
    ("goes", "go"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("dies", "die"),
    ("lies", "lie"),
    ("ties", "tie"),
    ("vies", "vie"),
    ("quizzes", "quiz"),
    ("focuses", "focus"),
    // Modals agree with every subject
    ("can", "can"),
    ("can't", "can't"),
    ("could", "could"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
    ("shall", "shall"),
    ("should", "should"),
    ("will", "will"),
    ("won't", "won't"),
    ("would", "would"),
];

static BUILTIN_NOUNS: OnceLock<Lexicon> = OnceLock::new();
static BUILTIN_VERBS: OnceLock<Lexicon> = OnceLock::new();

/// Lowercase singular form mapped to its fixed replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (singular, replacement) pairs, folding both sides to lowercase
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut lexicon = Self::new();
        lexicon.extend(pairs);
        lexicon
    }

    /// Built-in irregular noun table, initialized on first use
    pub fn builtin_nouns() -> &'static Lexicon {
        BUILTIN_NOUNS.get_or_init(|| Self::from_pairs(IRREGULAR_NOUNS.iter().copied()))
    }

    /// Built-in irregular verb table, initialized on first use
    pub fn builtin_verbs() -> &'static Lexicon {
        BUILTIN_VERBS.get_or_init(|| Self::from_pairs(IRREGULAR_VERBS.iter().copied()))
    }

    /// Parse a dictionary file body: one `singular replacement` pair per line
    ///
    /// Blank lines and lines starting with `#` are skipped. Any other line
    /// must hold exactly two whitespace-separated tokens.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lexicon = Self::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(singular), Some(replacement), None) => {
                    debug!("Adding '{}'->'{}'", singular, replacement);
                    lexicon.insert(singular, replacement);
                }
                _ => anyhow::bail!(
                    "line {}: expected `singular replacement`, found {:?}",
                    line_no + 1,
                    line
                ),
            }
        }

        Ok(lexicon)
    }

    /// Load a dictionary file from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
        let lexicon = Self::parse(&text)
            .with_context(|| format!("Malformed lexicon {}", path.display()))?;

        info!("Loaded {} irregular entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Add or replace entries; later pairs win
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (singular, replacement) in pairs {
            self.insert(singular.as_ref(), replacement.as_ref());
        }
    }

    /// Layer every entry of `other` over this lexicon
    pub fn merge(&mut self, other: &Lexicon) {
        self.extend(other.entries.iter());
    }

    fn insert(&mut self, singular: &str, replacement: &str) {
        self.entries
            .insert(singular.to_lowercase(), replacement.to_lowercase());
    }

    /// Look up an already-folded word
    pub fn get(&self, lower: &str) -> Option<&str> {
        self.entries.get(lower).map(String::as_str)
    }

    /// Iterate over (singular, replacement) entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Irregular plural for a folded noun from the built-in table
pub fn lookup_noun(lower: &str) -> Option<&'static str> {
    Lexicon::builtin_nouns().get(lower)
}

/// Irregular base form for a folded verb from the built-in table
pub fn lookup_verb(lower: &str) -> Option<&'static str> {
    Lexicon::builtin_verbs().get(lower)
}
