use crate::output::report::{format_artist_report, format_word_report, RankedReport};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub const ARTIST_REPORT_FILE: &str = "artist_count_results.txt";
pub const WORD_REPORT_FILE: &str = "word_count_results.txt";
pub const BENCHMARK_REPORT_FILE: &str = "performance_analysis.txt";

/// Writes reports into the output directory, creating it on first use.
pub struct OutputManager {
    output_dir: PathBuf,
    json_export: bool,
}

impl OutputManager {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            json_export: false,
        }
    }

    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json_export = enabled;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn write_artist_report(&self, report: &RankedReport) -> Result<PathBuf, ReportError> {
        let path = self.write_file(ARTIST_REPORT_FILE, &format_artist_report(report))?;
        if self.json_export {
            self.write_json("artist_count_results.json", report)?;
        }
        Ok(path)
    }

    pub fn write_word_report(
        &self,
        report: &RankedReport,
        top: Option<usize>,
    ) -> Result<PathBuf, ReportError> {
        let path = self.write_file(WORD_REPORT_FILE, &format_word_report(report, top))?;
        if self.json_export {
            self.write_json("word_count_results.json", report)?;
        }
        Ok(path)
    }

    pub fn write_benchmark_report(&self, contents: &str) -> Result<PathBuf, ReportError> {
        self.write_file(BENCHMARK_REPORT_FILE, contents)
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(name);
        fs::write(&path, contents)?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }

    fn write_json(&self, name: &str, report: &RankedReport) -> Result<PathBuf, ReportError> {
        let json = serde_json::to_string_pretty(&report.entries)?;
        self.write_file(name, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RankedReport {
        RankedReport::from_counts(
            "artist",
            vec![("Queen".to_string(), 2), ("Dio".to_string(), 1)],
        )
    }

    #[test]
    fn test_writes_reports_into_created_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manager = OutputManager::new(dir.path().join("results"));

        let artist_path = manager.write_artist_report(&sample()).unwrap();
        let word_path = manager.write_word_report(&sample(), None).unwrap();

        let artist_text = std::fs::read_to_string(artist_path).unwrap();
        assert!(artist_text.contains("1. Queen: 2 songs"));
        assert!(std::fs::read_to_string(word_path).unwrap().contains("2. Dio: 1"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let manager = OutputManager::new(dir.path()).with_json(true);

        manager.write_artist_report(&sample()).unwrap();

        let json = std::fs::read_to_string(dir.path().join("artist_count_results.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["key"], "Queen");
        assert_eq!(entries[0]["count"], 2);
    }
}
