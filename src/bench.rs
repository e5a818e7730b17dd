use crate::config::Config;
use crate::dataset::DatasetSource;
use crate::engine::{ArtistPolicy, Coordinator, PipelineError, PipelineOutcome, WordPolicy};
use std::fmt::Write;
use std::sync::Arc;

const BENCH_WORKER_COUNTS: [usize; 4] = [1, 2, 4, 8];

#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRun {
    pub worker_count: usize,
    pub artist_secs: f64,
    pub word_secs: f64,
}

pub struct BenchmarkOutcome {
    pub runs: Vec<BenchmarkRun>,
    /// Outcomes from the largest worker count, reused as the run's reports.
    pub artist: PipelineOutcome,
    pub word: PipelineOutcome,
}

/// Times both pipelines at increasing worker counts, like running the two
/// counting programs under a process-count sweep.
pub fn run_benchmark(config: &Config) -> Result<BenchmarkOutcome, PipelineError> {
    let source = Arc::new(DatasetSource::open(&config.input)?);

    let counts: Vec<usize> = BENCH_WORKER_COUNTS
        .iter()
        .copied()
        .filter(|count| *count <= config.worker_count.max(1))
        .collect();

    let mut runs = Vec::with_capacity(counts.len());
    let mut last: Option<(PipelineOutcome, PipelineOutcome)> = None;

    for count in counts {
        log::info!("benchmarking with {} worker(s)", count);

        let coordinator =
            Coordinator::new(source.clone(), count).with_options(config.artist_scan_options());
        let artist = coordinator.run(Arc::new(ArtistPolicy::new()))?;

        let coordinator =
            Coordinator::new(source.clone(), count).with_options(config.word_scan_options());
        let word = coordinator.run(Arc::new(WordPolicy::new()))?;

        runs.push(BenchmarkRun {
            worker_count: count,
            artist_secs: artist.stats.elapsed.as_secs_f64(),
            word_secs: word.stats.elapsed.as_secs_f64(),
        });
        last = Some((artist, word));
    }

    let Some((artist, word)) = last else {
        return Err(PipelineError::InvalidConfig(
            "benchmark produced no runs".to_string(),
        ));
    };

    Ok(BenchmarkOutcome {
        runs,
        artist,
        word,
    })
}

pub fn format_benchmark_report(outcome: &BenchmarkOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Performance Analysis - Parallel Processing");
    let _ = writeln!(out, "==========================================");
    let _ = writeln!(out);

    for (name, times) in [
        ("ARTIST COUNT", collect(outcome, |r| r.artist_secs)),
        ("WORD COUNT", collect(outcome, |r| r.word_secs)),
    ] {
        let _ = writeln!(out, "PIPELINE: {}", name);
        let _ = writeln!(out, "{:-<46}", "");
        let _ = writeln!(
            out,
            "{:<10} {:<12} {:<10} {:<12}",
            "Workers", "Time (s)", "Speedup", "Efficiency"
        );

        let baseline = times.first().map(|(_, secs)| *secs).unwrap_or(0.0);
        for (workers, secs) in &times {
            let speedup = if *secs > 0.0 { baseline / secs } else { 0.0 };
            let efficiency = speedup / *workers as f64;
            let _ = writeln!(
                out,
                "{:<10} {:<12.3} {:<10.2} {:<12.2}",
                workers, secs, speedup, efficiency
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Notes:");
    let _ = writeln!(
        out,
        "- Every worker scans the full input, which bounds achievable speedup."
    );
    let _ = writeln!(
        out,
        "- Collection is a sequential merge on the coordinator."
    );

    out
}

fn collect(outcome: &BenchmarkOutcome, secs: impl Fn(&BenchmarkRun) -> f64) -> Vec<(usize, f64)> {
    outcome
        .runs
        .iter()
        .map(|run| (run.worker_count, secs(run)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as IoWrite;

    #[test]
    fn test_benchmark_sweep_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "artist,song,link,text").unwrap();
        for i in 0..10 {
            writeln!(file, "Queen,Song{},link,la la la", i).unwrap();
        }

        let config = Config::default()
            .with_input(&path)
            .with_worker_count(2);

        let outcome = run_benchmark(&config).unwrap();

        assert_eq!(outcome.runs.len(), 2);
        assert_eq!(outcome.runs[0].worker_count, 1);
        assert_eq!(outcome.runs[1].worker_count, 2);
        assert_eq!(outcome.artist.stats.worker_count, 2);
        assert_eq!(outcome.artist.report.entries[0].key, "Queen");

        let report = format_benchmark_report(&outcome);
        assert!(report.contains("PIPELINE: ARTIST COUNT"));
        assert!(report.contains("Workers"));
    }

    #[test]
    fn test_benchmark_missing_input_is_fatal() {
        let config = Config::default().with_input("no/such/file.csv");
        assert!(matches!(
            run_benchmark(&config),
            Err(PipelineError::Dataset(_))
        ));
    }
}
