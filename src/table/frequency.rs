use ahash::RandomState;
use indexmap::IndexMap;

/// Insertion-ordered key → occurrence-count table. Local tables are built
/// by one worker each; the global table is built by merging locals in a
/// fixed order, which is what makes report tie-breaking deterministic.
pub struct FrequencyTable {
    entries: IndexMap<String, u64, RandomState>,
    capacity: Option<usize>,
    dropped: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_capacity_limit(None)
    }

    /// `capacity` bounds the number of distinct keys. When the table is
    /// full, new keys are refused while existing keys keep counting; the
    /// refusals are counted and the first one is logged.
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            entries: IndexMap::with_hasher(RandomState::new()),
            capacity,
            dropped: 0,
        }
    }

    pub fn increment(&mut self, key: &str) {
        if let Some(count) = self.entries.get_mut(key) {
            *count += 1;
            return;
        }
        self.insert_new(key.to_string(), 1);
    }

    pub fn merge(&mut self, other: FrequencyTable) {
        for (key, count) in other.entries {
            if let Some(existing) = self.entries.get_mut(&key) {
                *existing += count;
            } else {
                self.insert_new(key, count);
            }
        }
        self.dropped += other.dropped;
    }

    fn insert_new(&mut self, key: String, count: u64) {
        if self.is_full() {
            if self.dropped == 0 {
                log::warn!(
                    "distinct-key capacity {} reached; further new keys are dropped",
                    self.capacity.unwrap_or(0)
                );
            }
            self.dropped += count;
            return;
        }
        self.entries.insert(key, count);
    }

    pub fn count(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.entries.len() >= cap)
    }

    /// Occurrences refused because the table was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted by count descending. The sort is stable, so equal
    /// counts keep their insertion order.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
