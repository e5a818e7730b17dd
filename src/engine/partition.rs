/// Round-robin record ownership. Every worker runs the same record
/// recognition over the same input, so the sequential index agrees
/// everywhere without any coordination message.
#[derive(Debug, Clone, Copy)]
pub struct PartitionAssigner {
    worker_count: usize,
}

impl PartitionAssigner {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn owner(&self, sequence_index: usize) -> usize {
        sequence_index % self.worker_count
    }

    pub fn owns(&self, worker_id: usize, sequence_index: usize) -> bool {
        self.owner(sequence_index) == worker_id
    }
}
