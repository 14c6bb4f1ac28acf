// WHY: Message templates carry verb choices inline ("$e $v(is:are) here") so one
// template serves singular and plural subjects; missing plural options fall back to the verb rules

use crate::inflect::Pluralizer;
use tracing::debug;

/// Marker that introduces a verb option list in a template
pub const VERB_MARKER: &str = "$v";

/// Select option `option` from an option list at the start of `src`
///
/// Options are separated by ':' or ','. Double quotes protect separators,
/// spaces and parentheses. A parenthesized list ends after its closing ')';
/// a bare list ends at the first unquoted space. Returns the chosen option
/// (empty if absent) and the number of bytes of `src` consumed.
///
/// ```
/// use plurality::template::parse_option;
/// assert_eq!(parse_option("(is:are) here", 1), ("are".to_string(), 8));
/// assert_eq!(parse_option("wishes he", 0), ("wishes".to_string(), 6));
/// ```
pub fn parse_option(src: &str, option: usize) -> (String, usize) {
    let mut chosen = String::new();
    let mut depth: i32 = 0;
    let mut in_quote = false;
    let mut current = 0usize;

    for (i, c) in src.char_indices() {
        match c {
            '(' if !in_quote => depth += 1,
            ')' if !in_quote => {
                depth -= 1;
                if depth == 0 {
                    return (chosen, i + c.len_utf8());
                }
            }
            '"' => in_quote = !in_quote,
            ':' | ',' if !in_quote => current += 1,
            ' ' if !in_quote && depth == 0 => return (chosen, i),
            _ if current == option => chosen.push(c),
            _ => {}
        }
    }

    (chosen, src.len())
}

/// Verb for the requested plurality, falling back to option 0 run through the verb rules
pub fn agree_verb(pluralizer: &Pluralizer, src: &str, plurality: usize) -> (String, usize) {
    let (chosen, consumed) = parse_option(src, plurality);
    if !chosen.is_empty() {
        return (chosen, consumed);
    }

    let (first, consumed) = parse_option(src, 0);
    debug!("No option {} in {:?}, deriving from {:?}", plurality, &src[..consumed], first);
    (pluralizer.verb(&first), consumed)
}

/// Replace every `$v` option list in `template` with the verb agreeing with the subject
pub fn expand_verbs(pluralizer: &Pluralizer, template: &str, plural: bool) -> String {
    let plurality = usize::from(plural);
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(VERB_MARKER) {
        result.push_str(&rest[..pos]);
        let options = &rest[pos + VERB_MARKER.len()..];
        let (verb, consumed) = agree_verb(pluralizer, options, plurality);
        result.push_str(&verb);
        rest = &options[consumed..];
    }

    result.push_str(rest);
    result
}
