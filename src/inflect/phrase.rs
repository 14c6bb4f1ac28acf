// WHY: Noun phrases pluralize only their head noun; everything around it is copied through
// "a bag of holding" -> "eleven bags of holding", never "holdings"

use super::classify::{find_ignore_case, strip_prefix_ignore_case};
use super::fold_same_length;
use super::lexicon::Lexicon;
use super::noun::pluralize_noun_with;
use super::numbers::int_to_words;

/// Article prefixes dropped before the count is written; at most one is stripped
pub const ARTICLES: &[&str] = &["a ", "an ", "the ", "one "];

/// Preposition that ends the head segment
pub const ATTACHMENT: &str = " of ";

/// Decomposed noun phrase, borrowing every region from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounPhrase<'a> {
    /// Leading whitespace, copied verbatim
    pub leading: &'a str,
    /// Stripped article with its original casing, if any
    pub article: Option<&'a str>,
    /// Words before the head noun, including the whitespace that follows them
    pub modifiers: &'a str,
    /// The single word that gets pluralized
    pub head: &'a str,
    /// " of ..." attachment, or empty
    pub remainder: &'a str,
}

impl<'a> NounPhrase<'a> {
    /// Split a phrase into its regions
    pub fn parse(phrase: &'a str) -> Self {
        let body = phrase.trim_start();
        let leading = &phrase[..phrase.len() - body.len()];

        let (article, body) = ARTICLES
            .iter()
            .find_map(|article| {
                strip_prefix_ignore_case(body, article)
                    .map(|rest| (&body[..body.len() - rest.len()], rest))
            })
            .map_or((None, body), |(article, rest)| (Some(article), rest));

        let head_end = find_ignore_case(body, ATTACHMENT).unwrap_or(body.len());
        let (segment, remainder) = body.split_at(head_end);

        let word_start = segment
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let (modifiers, head) = segment.split_at(word_start);

        Self {
            leading,
            article,
            modifiers,
            head,
            remainder,
        }
    }

    /// Reassemble with `count` spelled out in place of the article
    /// A negative count omits the number entirely
    pub fn render(&self, nouns: &Lexicon, count: i64) -> String {
        let head = pluralize_noun_with(nouns, self.head, count);

        let mut result = String::with_capacity(
            self.leading.len() + self.modifiers.len() + head.len() + self.remainder.len() + 16,
        );
        result.push_str(self.leading);
        if count >= 0 {
            result.push_str(&int_to_words(count));
            result.push(' ');
        }
        result.push_str(self.modifiers);
        result.push_str(&head);
        result.push_str(self.remainder);
        result
    }
}

/// Pluralize a singular noun phrase: "a short sword" with 6 -> "six short swords"
///
/// Heuristic: the last word before any " of " is treated as the head noun.
pub fn pluralize_noun_phrase(phrase: &str, count: i64) -> String {
    pluralize_noun_phrase_with(Lexicon::builtin_nouns(), phrase, count)
}

/// Same as [`pluralize_noun_phrase`], against a caller-supplied irregular table
pub fn pluralize_noun_phrase_with(nouns: &Lexicon, phrase: &str, count: i64) -> String {
    if fold_same_length(phrase, "pluralize_noun_phrase").is_none() {
        return phrase.to_string();
    }

    NounPhrase::parse(phrase).render(nouns, count)
}
