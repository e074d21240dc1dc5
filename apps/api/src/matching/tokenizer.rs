//! Word tokenizer shared by skill extraction and job indexing.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of Unicode word characters (letters, digits, underscore).
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word regex is valid"));

/// A membership-only set of lowercase tokens.
pub type TokenSet = HashSet<String>;

/// Splits `text` into lowercase word tokens, in order of appearance.
/// Punctuation and whitespace are separators and never appear in the output.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Union of `tokenize` over every input string.
pub fn token_set<I, S>(texts: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .flat_map(|t| tokenize(t.as_ref()))
        .collect()
}
