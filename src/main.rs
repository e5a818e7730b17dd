use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use songdata_frequency_analyzer::bench::{format_benchmark_report, run_benchmark};
use songdata_frequency_analyzer::engine::PipelineOutcome;
use songdata_frequency_analyzer::{
    ArtistPolicy, Config, Coordinator, DatasetSource, OutputManager, WordPolicy,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version = "1.0.0")]
#[command(about = "Parallel artist and lyric word frequency reports over a song dataset", long_about = None)]
struct Args {
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,

    #[arg(short, long)]
    workers: Option<usize>,

    /// Truncate the word report to the top N words (0 = full list).
    #[arg(long, default_value_t = 0)]
    top_words: usize,

    /// Cap on distinct artist keys (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_artists: usize,

    /// Cap on distinct word keys (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_words: usize,

    /// Judge every physical line on its own instead of reassembling
    /// quoted multi-line records.
    #[arg(long)]
    legacy_reassembly: bool,

    #[arg(long)]
    json: bool,

    /// Time both pipelines across worker counts 1, 2, 4, 8.
    #[arg(long)]
    benchmark: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let mut config = Config::new()
        .with_input(&args.input)
        .with_output_dir(&args.output_dir)
        .with_worker_count(args.workers.unwrap_or_else(num_cpus::get));
    config.top_words = (args.top_words > 0).then_some(args.top_words);
    config.max_artists = (args.max_artists > 0).then_some(args.max_artists);
    config.max_words = (args.max_words > 0).then_some(args.max_words);
    config.legacy_reassembly = args.legacy_reassembly;
    config.json_export = args.json;
    config.show_progress = !args.no_progress;

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    println!("{}", "Song Dataset Frequency Analyzer".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    let result = if args.benchmark {
        run_benchmark_mode(&config)
    } else {
        run_reports(&config)
    };

    if let Err(e) = result {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Finished in {:.2}s",
        "[+]".green(),
        start_time.elapsed().as_secs_f64()
    );
}

fn run_reports(config: &Config) -> Result<()> {
    println!("{} Loading dataset: {}", "[*]".blue(), config.input.display());

    let source = Arc::new(DatasetSource::open(&config.input)?);

    println!(
        "{} Dataset loaded ({} bytes), using {} worker(s)",
        "[+]".green(),
        source.len(),
        config.worker_count
    );

    let progress = if config.show_progress {
        let pb = ProgressBar::new(3);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    if let Some(ref pb) = progress {
        pb.set_message("Counting songs per artist...");
    }

    let coordinator = Coordinator::new(source.clone(), config.worker_count)
        .with_options(config.artist_scan_options());
    let artist = coordinator.run(Arc::new(ArtistPolicy::new()))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.set_message("Counting words in lyrics...");
    }

    let coordinator = Coordinator::new(source.clone(), config.worker_count)
        .with_options(config.word_scan_options());
    let word = coordinator.run(Arc::new(WordPolicy::new()))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.set_message("Writing reports...");
    }

    write_reports(config, &artist, &word)?;

    if let Some(pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Complete");
    }

    print_summary(&artist, &word);
    Ok(())
}

fn run_benchmark_mode(config: &Config) -> Result<()> {
    println!(
        "{} Benchmarking {} across worker counts...",
        "[*]".blue(),
        config.input.display()
    );

    let outcome = run_benchmark(config)?;

    for run in &outcome.runs {
        println!(
            "{} {} worker(s): artists {:.2}s, words {:.2}s",
            "[+]".green(),
            run.worker_count,
            run.artist_secs,
            run.word_secs
        );
    }

    let manager = OutputManager::new(&config.output_dir);
    let path = manager.write_benchmark_report(&format_benchmark_report(&outcome))?;
    println!(
        "{} Benchmark report saved to: {}",
        "[+]".green(),
        path.display()
    );

    write_reports(config, &outcome.artist, &outcome.word)?;
    print_summary(&outcome.artist, &outcome.word);
    Ok(())
}

fn write_reports(config: &Config, artist: &PipelineOutcome, word: &PipelineOutcome) -> Result<()> {
    let manager = OutputManager::new(&config.output_dir).with_json(config.json_export);

    let path = manager.write_artist_report(&artist.report)?;
    println!("{} Artist report saved to: {}", "[+]".green(), path.display());

    let path = manager.write_word_report(&word.report, config.top_words)?;
    println!("{} Word report saved to: {}", "[+]".green(), path.display());

    Ok(())
}

fn print_summary(artist: &PipelineOutcome, word: &PipelineOutcome) {
    println!();
    println!("{}", "Results Summary".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    println!(
        "  Songs counted: {}",
        artist.report.total_count.to_string().green()
    );
    println!(
        "  Unique artists: {}",
        artist.report.unique_keys().to_string().green()
    );
    println!(
        "  Unique words: {}",
        word.report.unique_keys().to_string().green()
    );
    println!(
        "  Word occurrences: {}",
        word.report.total_count.to_string().green()
    );

    for (name, outcome) in [("artist", artist), ("word", word)] {
        if outcome.stats.dropped_keys > 0 {
            println!(
                "  {} {} {} keys dropped at the capacity ceiling",
                "[!]".yellow(),
                outcome.stats.dropped_keys,
                name
            );
        }
    }
}
