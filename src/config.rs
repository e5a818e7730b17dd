use crate::engine::ScanOptions;
use crate::record::{ReassemblyMode, DEFAULT_MIN_RECORD_LEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub worker_count: usize,
    /// Word report truncation; `None` emits the full list.
    pub top_words: Option<usize>,
    /// Distinct-key ceilings; `None` grows without bound.
    pub max_artists: Option<usize>,
    pub max_words: Option<usize>,
    pub min_record_len: usize,
    pub legacy_reassembly: bool,
    pub json_export: bool,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/spotify_millsongdata.csv"),
            output_dir: PathBuf::from("results"),
            worker_count: num_cpus::get(),
            top_words: None,
            max_artists: None,
            max_words: None,
            min_record_len: DEFAULT_MIN_RECORD_LEN,
            legacy_reassembly: false,
            json_export: false,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.input = input.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn reassembly_mode(&self) -> ReassemblyMode {
        if self.legacy_reassembly {
            ReassemblyMode::LineOnly
        } else {
            ReassemblyMode::QuoteAware
        }
    }

    pub fn artist_scan_options(&self) -> ScanOptions {
        ScanOptions {
            mode: self.reassembly_mode(),
            min_record_len: self.min_record_len,
            capacity: self.max_artists,
        }
    }

    pub fn word_scan_options(&self) -> ScanOptions {
        ScanOptions {
            mode: self.reassembly_mode(),
            min_record_len: self.min_record_len,
            capacity: self.max_words,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.worker_count == 0 {
            return Err("worker count must be at least 1".to_string());
        }
        if self.min_record_len == 0 {
            return Err("minimum record length must be at least 1".to_string());
        }
        if self.top_words == Some(0) {
            return Err("top-words limit must be at least 1 when set".to_string());
        }
        Ok(())
    }
}
