/// Split a free-text address into lowercase whitespace-separated tokens.
///
/// Punctuation is kept as part of the token it is attached to.
pub fn tokenize(address: Option<&str>) -> Vec<String> {
    match address {
        Some(text) => text
            .split_whitespace()
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect(),
        None => Vec::new(),
    }
}
