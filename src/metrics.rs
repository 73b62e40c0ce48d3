//! Performance counters for a single search invocation.
//!
//! The search is single-threaded, so these are plain integers rather than
//! atomics; a fresh `SearchMetrics` is filled in per call and returned to
//! the caller alongside the chosen action.

/// Counters collected while a search runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// States whose value was computed (cache hits excluded).
    pub nodes_visited: u64,
    /// Child values served from the transposition table.
    pub cache_hits: u64,
    /// Child values that had to be computed and stored.
    pub cache_misses: u64,
    /// Action loops abandoned early by an alpha-beta bound.
    pub prunes: u64,
    /// Deepest recursion level reached.
    pub max_depth_reached: usize,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    #[inline]
    pub fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    #[inline]
    pub fn record_cache_miss(&mut self) {
        self.cache_misses += 1;
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.prunes += 1;
    }

    #[inline]
    pub fn record_depth(&mut self, depth: usize) {
        if depth > self.max_depth_reached {
            self.max_depth_reached = depth;
        }
    }

    /// Hit rate over all cache probes, or 0.0 before any probe.
    pub fn cache_hit_rate(&self) -> f64 {
        let probes = self.cache_hits + self.cache_misses;
        if probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / probes as f64
        }
    }
}
