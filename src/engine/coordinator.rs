use crate::dataset::DatasetSource;
use crate::engine::error::PipelineError;
use crate::engine::partition::PartitionAssigner;
use crate::engine::policy::CountPolicy;
use crate::engine::state::PipelineState;
use crate::engine::worker::{scan_partition, ScanOptions, ScanWorker};
use crate::output::report::RankedReport;
use parking_lot::RwLock;
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    pub worker_count: usize,
    pub lines_read: u64,
    pub records_seen: u64,
    pub records_owned_total: u64,
    pub distinct_keys: usize,
    pub dropped_keys: u64,
    pub elapsed: Duration,
}

impl RunStats {
    pub fn summary(&self) -> String {
        format!(
            "Workers: {}, Records: {}, Distinct keys: {}, Dropped: {}, Elapsed: {:.2}s",
            self.worker_count,
            self.records_seen,
            self.distinct_keys,
            self.dropped_keys,
            self.elapsed.as_secs_f64()
        )
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub report: RankedReport,
    pub stats: RunStats,
}

/// Drives one scan-collect-sort-emit run. The coordinator doubles as
/// worker 0 on the calling thread; the remaining workers are spawned
/// threads whose tables arrive over per-worker channels, merged in
/// ascending worker id order so tie-breaking stays deterministic.
pub struct Coordinator {
    source: Arc<DatasetSource>,
    worker_count: usize,
    options: ScanOptions,
    state: Arc<RwLock<PipelineState>>,
}

impl Coordinator {
    pub fn new(source: Arc<DatasetSource>, worker_count: usize) -> Self {
        Self {
            source,
            worker_count,
            options: ScanOptions::default(),
            state: Arc::new(RwLock::new(PipelineState::Idle)),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> PipelineState {
        *self.state.read()
    }

    fn set_state(&self, state: PipelineState) {
        *self.state.write() = state;
        log::debug!("pipeline state: {}", state);
    }

    pub fn run(&self, policy: Arc<dyn CountPolicy>) -> Result<PipelineOutcome, PipelineError> {
        if self.worker_count == 0 {
            return Err(PipelineError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }

        let started = Instant::now();
        let assigner = PartitionAssigner::new(self.worker_count);
        let barrier = Arc::new(Barrier::new(self.worker_count));

        self.set_state(PipelineState::Scanning);

        let mut workers = Vec::with_capacity(self.worker_count.saturating_sub(1));
        let mut receivers = Vec::with_capacity(self.worker_count.saturating_sub(1));
        for id in 1..self.worker_count {
            let (sender, receiver) = mpsc::channel();
            workers.push(ScanWorker::spawn(
                id,
                self.source.clone(),
                policy.clone(),
                assigner,
                self.options,
                barrier.clone(),
                sender,
            ));
            receivers.push(receiver);
        }

        barrier.wait();
        let local = scan_partition(&self.source, policy.as_ref(), &assigner, 0, &self.options);

        self.set_state(PipelineState::Collecting);

        let mut stats = RunStats {
            worker_count: self.worker_count,
            lines_read: local.stats.lines_read,
            records_seen: local.stats.records_seen,
            records_owned_total: local.stats.records_owned,
            distinct_keys: 0,
            dropped_keys: 0,
            elapsed: Duration::ZERO,
        };

        let mut global = local.table;
        for (i, receiver) in receivers.into_iter().enumerate() {
            let id = i + 1;
            match receiver.recv() {
                Ok(report) => {
                    stats.records_owned_total += report.stats.records_owned;
                    global.merge(report.table);
                }
                Err(_) => {
                    self.set_state(PipelineState::Failed);
                    for worker in std::mem::take(&mut workers) {
                        worker.join()?;
                    }
                    return Err(PipelineError::ChannelClosed(id));
                }
            }
        }

        for worker in workers {
            worker.join()?;
        }

        self.set_state(PipelineState::Sorting);
        let ranked = global.ranked();

        self.set_state(PipelineState::Emitting);
        let report = RankedReport::from_counts(policy.label(), ranked);

        stats.distinct_keys = global.len();
        stats.dropped_keys = global.dropped();
        stats.elapsed = started.elapsed();

        log::info!("{} pipeline finished: {}", policy.label(), stats.summary());

        self.set_state(PipelineState::Done);
        Ok(PipelineOutcome { report, stats })
    }
}
