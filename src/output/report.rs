use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub key: String,
    pub count: u64,
}

/// Final ranked result of one pipeline run, ready for rendering.
#[derive(Debug, Clone)]
pub struct RankedReport {
    pub label: String,
    pub entries: Vec<RankedEntry>,
    pub total_count: u64,
}

impl RankedReport {
    /// `counts` must already be sorted; ranks are assigned 1-based in order.
    pub fn from_counts(label: &str, counts: Vec<(String, u64)>) -> Self {
        let total_count = counts.iter().map(|(_, count)| count).sum();
        let entries = counts
            .into_iter()
            .enumerate()
            .map(|(i, (key, count))| RankedEntry {
                rank: i + 1,
                key,
                count,
            })
            .collect();

        Self {
            label: label.to_string(),
            entries,
            total_count,
        }
    }

    pub fn unique_keys(&self) -> usize {
        self.entries.len()
    }
}

pub fn format_artist_report(report: &RankedReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Artists With Most Songs");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total unique artists: {}", report.unique_keys());
    let _ = writeln!(out, "Total songs: {}", report.total_count);
    let _ = writeln!(out);
    let _ = writeln!(out, "All artists (ranked by song count):");
    let _ = writeln!(out, "-----------------------------------");

    for entry in &report.entries {
        let _ = writeln!(out, "{}. {}: {} songs", entry.rank, entry.key, entry.count);
    }

    out
}

/// `top` truncates the ranked list; `None` emits every word.
pub fn format_word_report(report: &RankedReport, top: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Word Frequency In Song Lyrics");
    let _ = writeln!(out, "=============================");
    let _ = writeln!(out);

    let limit = top.unwrap_or(report.entries.len());
    for entry in report.entries.iter().take(limit) {
        let _ = writeln!(out, "{}. {}: {}", entry.rank, entry.key, entry.count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RankedReport {
        RankedReport::from_counts(
            "artist",
            vec![
                ("Queen".to_string(), 3),
                ("Abba".to_string(), 2),
                ("Dio".to_string(), 1),
            ],
        )
    }

    #[test]
    fn test_ranks_are_one_based_in_order() {
        let report = sample();
        assert_eq!(report.entries[0].rank, 1);
        assert_eq!(report.entries[2].rank, 3);
        assert_eq!(report.total_count, 6);
    }

    #[test]
    fn test_artist_report_format() {
        let text = format_artist_report(&sample());

        assert!(text.contains("Total unique artists: 3\n"));
        assert!(text.contains("Total songs: 6\n"));
        assert!(text.contains("1. Queen: 3 songs\n"));
        assert!(text.contains("3. Dio: 1 songs\n"));
    }

    #[test]
    fn test_word_report_format() {
        let report = RankedReport::from_counts(
            "word",
            vec![("is".to_string(), 2), ("fantasy".to_string(), 1)],
        );
        let text = format_word_report(&report, None);

        assert!(text.contains("1. is: 2\n"));
        assert!(text.contains("2. fantasy: 1\n"));
    }

    #[test]
    fn test_word_report_truncation() {
        let report = RankedReport::from_counts(
            "word",
            vec![
                ("a1".to_string(), 3),
                ("b2".to_string(), 2),
                ("c3".to_string(), 1),
            ],
        );
        let text = format_word_report(&report, Some(2));

        assert!(text.contains("2. b2: 2\n"));
        assert!(!text.contains("c3"));
    }
}
