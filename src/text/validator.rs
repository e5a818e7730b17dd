use crate::text::lexicon::DEFAULT_REJECTION_LIST;
use std::collections::HashSet;

/// Rejection policy for candidate artist names. The lexicon is fixed at
/// construction; swapping it is configuration, not a policy change.
pub struct ArtistValidator {
    lexicon: HashSet<String>,
}

impl ArtistValidator {
    pub fn new() -> Self {
        Self::with_lexicon(DEFAULT_REJECTION_LIST.iter().map(|s| s.to_string()))
    }

    pub fn with_lexicon<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            lexicon: words.into_iter().collect(),
        }
    }

    pub fn is_valid(&self, name: &str) -> bool {
        let len = name.chars().count();
        if len < 2 {
            return false;
        }

        if self.lexicon.contains(name) {
            return false;
        }

        if len <= 3 && !name.chars().any(|c| c.is_uppercase()) {
            return false;
        }

        // Multi-word candidates made up mostly of common words are lyric
        // fragments, not names.
        if name.contains(' ') {
            let words: Vec<&str> = name.split_whitespace().collect();
            let common = words.iter().filter(|w| self.lexicon.contains(**w)).count();
            if !words.is_empty() && common * 2 > words.len() {
                return false;
            }
        }

        true
    }
}

impl Default for ArtistValidator {
    fn default() -> Self {
        Self::new()
    }
}
