use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b[a-z0-9]+\b").expect("word pattern is valid"))
}

/// Tokens to index a stored record under: lowercased words of length > 1,
/// deduplicated.
pub fn tokenize_text(text: &str) -> HashSet<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 1)
        .collect()
}

/// Tokens of a search query, in input order. Same normalization as
/// `tokenize_text` so query terms line up with index entries.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| word.len() > 1)
        .collect()
}
