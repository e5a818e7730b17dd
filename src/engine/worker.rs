use crate::dataset::DatasetSource;
use crate::engine::error::PipelineError;
use crate::engine::partition::PartitionAssigner;
use crate::engine::policy::CountPolicy;
use crate::record::{ReassemblyMode, RecordReassembler, DEFAULT_MIN_RECORD_LEN};
use crate::table::FrequencyTable;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Barrier};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub mode: ReassemblyMode,
    pub min_record_len: usize,
    pub capacity: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ReassemblyMode::QuoteAware,
            min_record_len: DEFAULT_MIN_RECORD_LEN,
            capacity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    pub lines_read: u64,
    pub records_seen: u64,
    pub records_owned: u64,
}

/// A worker's complete scan result, handed to the coordinator in one piece.
pub struct WorkerReport {
    pub worker_id: usize,
    pub table: FrequencyTable,
    pub stats: ScanStats,
}

/// Scans the whole input from the worker's own cursor, skipping the header
/// line unconditionally, and accumulates keys for the records this worker
/// owns. Every worker numbers all records, owned or not.
pub fn scan_partition(
    source: &DatasetSource,
    policy: &dyn CountPolicy,
    assigner: &PartitionAssigner,
    worker_id: usize,
    options: &ScanOptions,
) -> WorkerReport {
    let mut reader = source.reader();

    let mut header = Vec::new();
    let header_read = matches!(reader.read_until(b'\n', &mut header), Ok(n) if n > 0);

    let mut reassembler = RecordReassembler::new(reader)
        .with_mode(options.mode)
        .with_min_record_len(options.min_record_len);

    let mut table = FrequencyTable::with_capacity_limit(options.capacity);
    let mut stats = ScanStats::default();
    let mut keys = Vec::new();

    for (index, record) in reassembler.by_ref().enumerate() {
        stats.records_seen += 1;
        if !assigner.owns(worker_id, index) {
            continue;
        }
        stats.records_owned += 1;

        keys.clear();
        policy.keys(&record, &mut keys);
        for key in &keys {
            table.increment(key);
        }
    }

    stats.lines_read = reassembler.lines_read() + u64::from(header_read);

    log::debug!(
        "worker {} scanned {} records, owned {}, {} distinct {} keys",
        worker_id,
        stats.records_seen,
        stats.records_owned,
        table.len(),
        policy.label()
    );

    WorkerReport {
        worker_id,
        table,
        stats,
    }
}

/// One spawned scan thread. The coordinator itself runs `scan_partition`
/// directly as worker 0 and never goes through this type.
pub struct ScanWorker {
    id: usize,
    handle: Option<JoinHandle<()>>,
}

impl ScanWorker {
    pub fn spawn(
        id: usize,
        source: Arc<DatasetSource>,
        policy: Arc<dyn CountPolicy>,
        assigner: PartitionAssigner,
        options: ScanOptions,
        barrier: Arc<Barrier>,
        sender: Sender<WorkerReport>,
    ) -> Self {
        let handle = thread::spawn(move || {
            barrier.wait();
            let report = scan_partition(&source, policy.as_ref(), &assigner, id, &options);
            let _ = sender.send(report);
        });

        Self {
            id,
            handle: Some(handle),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn join(mut self) -> Result<(), PipelineError> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| PipelineError::WorkerPanicked(self.id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::policy::{ArtistPolicy, WordPolicy};

    const INPUT: &str = "artist,song,link,text\n\
        Queen,One,link,la la\n\
        Abba,Two,link,la di da\n\
        Queen,Three,link,da\n\
        Dio,Four,link,la\n";

    #[test]
    fn test_scan_counts_owned_records_only() {
        let source = DatasetSource::from_text(INPUT);
        let assigner = PartitionAssigner::new(2);
        let options = ScanOptions::default();

        let even = scan_partition(&source, &ArtistPolicy::new(), &assigner, 0, &options);
        let odd = scan_partition(&source, &ArtistPolicy::new(), &assigner, 1, &options);

        assert_eq!(even.stats.records_seen, 4);
        assert_eq!(odd.stats.records_seen, 4);
        assert_eq!(even.stats.records_owned, 2);
        assert_eq!(odd.stats.records_owned, 2);

        // Records 0 and 2 are both Queen.
        assert_eq!(even.table.count("Queen"), Some(2));
        assert_eq!(odd.table.count("Abba"), Some(1));
        assert_eq!(odd.table.count("Dio"), Some(1));
    }

    #[test]
    fn test_header_skipped_even_when_it_looks_like_a_record() {
        let source = DatasetSource::from_text("Queen,Song,link,text\nAbba,Two,link,la\n");
        let assigner = PartitionAssigner::new(1);

        let report = scan_partition(
            &source,
            &ArtistPolicy::new(),
            &assigner,
            0,
            &ScanOptions::default(),
        );

        assert_eq!(report.stats.records_seen, 1);
        assert_eq!(report.table.count("Queen"), None);
        assert_eq!(report.table.count("Abba"), Some(1));
    }

    #[test]
    fn test_word_scan_accumulates_occurrences() {
        let source = DatasetSource::from_text(INPUT);
        let assigner = PartitionAssigner::new(1);

        let report = scan_partition(
            &source,
            &WordPolicy::new(),
            &assigner,
            0,
            &ScanOptions::default(),
        );

        assert_eq!(report.table.count("la"), Some(4));
        assert_eq!(report.table.count("da"), Some(2));
        assert_eq!(report.table.count("di"), Some(1));
    }

    #[test]
    fn test_lines_read_includes_header() {
        let source = DatasetSource::from_text(INPUT);
        let assigner = PartitionAssigner::new(1);

        let report = scan_partition(
            &source,
            &WordPolicy::new(),
            &assigner,
            0,
            &ScanOptions::default(),
        );

        assert_eq!(report.stats.lines_read, 5);
    }
}
