// WHY: Character and substring predicates shared by every rule layer
// All matching here is ASCII case-insensitive so positions found in the folded view are valid in the original

/// Check if a character is an English vowel, counting 'y'
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Byte variant used by the suffix rules, which index the folded word bytewise
/// Non-ASCII bytes (UTF-8 lead or continuation bytes) are never vowels
pub(crate) fn is_vowel_byte(b: u8) -> bool {
    b.is_ascii() && is_vowel(char::from(b))
}

/// Strip `prefix` from the start of `text`, ignoring ASCII case
/// Returns the remainder of the original string, casing intact
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}
