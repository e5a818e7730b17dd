use crate::record::FieldExtractor;
use crate::text::{ArtistValidator, Tokenizer};

/// Extraction + normalization + validation strategy that turns one
/// reassembled record into the keys it contributes to a frequency table.
/// The artist and word pipelines differ only in their policy.
pub trait CountPolicy: Send + Sync {
    fn label(&self) -> &'static str;
    fn keys(&self, record: &str, out: &mut Vec<String>);
}

/// One key per record: the validated artist name, case preserved.
pub struct ArtistPolicy {
    validator: ArtistValidator,
}

impl ArtistPolicy {
    pub fn new() -> Self {
        Self {
            validator: ArtistValidator::new(),
        }
    }

    pub fn with_validator(validator: ArtistValidator) -> Self {
        Self { validator }
    }
}

impl CountPolicy for ArtistPolicy {
    fn label(&self) -> &'static str {
        "artist"
    }

    fn keys(&self, record: &str, out: &mut Vec<String>) {
        let artist = FieldExtractor::artist(record);
        if !artist.is_empty() && self.validator.is_valid(&artist) {
            out.push(artist);
        }
    }
}

impl Default for ArtistPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// One key per word occurrence in the lyric field, lowercased.
#[derive(Default)]
pub struct WordPolicy;

impl WordPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl CountPolicy for WordPolicy {
    fn label(&self) -> &'static str {
        "word"
    }

    fn keys(&self, record: &str, out: &mut Vec<String>) {
        if let Some(lyric) = FieldExtractor::lyric(record) {
            out.extend(Tokenizer::tokenize(&lyric));
        }
    }
}
