use regex::Regex;
use std::sync::OnceLock;

/// Runs of two or more word characters; single letters and punctuation are dropped.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Splits text into lowercase terms, in order of occurrence, duplicates kept.
///
/// Catalog rows and queries go through the same function so that they share
/// one vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
    token_regex()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
