use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s,.\-!?;:()\[\]{}"]+"#).unwrap());

pub struct Tokenizer;

impl Tokenizer {
    /// Splits lyric text into normalized lowercase word tokens. Empty
    /// fragments disappear; there is no word-length floor.
    pub fn tokenize(text: &str) -> Vec<String> {
        TOKEN_SPLIT
            .split(text)
            .filter_map(Self::normalize)
            .collect()
    }

    /// Keeps alphanumerics and apostrophes, drops one enclosing apostrophe
    /// on each side (interior contraction apostrophes stay), lowercases.
    pub fn normalize(fragment: &str) -> Option<String> {
        let word: String = fragment
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect();

        let word = word.strip_prefix('\'').unwrap_or(&word);
        let word = word.strip_suffix('\'').unwrap_or(word);

        if word.is_empty() {
            None
        } else {
            Some(word.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        assert_eq!(
            Tokenizer::tokenize("Is this the real life? Is this just fantasy!"),
            vec!["is", "this", "the", "real", "life", "is", "this", "just", "fantasy"]
        );
    }

    #[test]
    fn test_contraction_apostrophe_preserved() {
        assert_eq!(Tokenizer::tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_enclosing_apostrophes_stripped() {
        assert_eq!(Tokenizer::normalize("'twas'").as_deref(), Some("twas"));
        assert_eq!(Tokenizer::normalize("rockin'").as_deref(), Some("rockin"));
    }

    #[test]
    fn test_special_characters_dropped() {
        assert_eq!(Tokenizer::normalize("he@llo*").as_deref(), Some("hello"));
    }

    #[test]
    fn test_hyphen_is_a_separator() {
        assert_eq!(Tokenizer::tokenize("rock-n-roll"), vec!["rock", "n", "roll"]);
    }

    #[test]
    fn test_empty_fragments_discarded() {
        assert!(Tokenizer::tokenize("... !!! ---").is_empty());
        assert_eq!(Tokenizer::normalize("''"), None);
    }

    #[test]
    fn test_normalization_idempotent() {
        for word in ["fantasy", "don't", "42"] {
            let once = Tokenizer::normalize(word).unwrap();
            let twice = Tokenizer::normalize(&once).unwrap();
            assert_eq!(once, twice);
            assert_eq!(once, word);
        }
    }
}
