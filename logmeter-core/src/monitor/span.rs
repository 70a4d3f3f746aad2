use crate::monitor::error::ConfigError;

/// Circular prefix-sum buffer answering "sum of the last K closed segment
/// totals" in O(1) per push, K = span / segment.
///
/// Each slot holds a running cumulative sum rather than a raw segment total.
/// A push advances the cursor one slot (wrapping), evicts the cumulative
/// written K pushes ago from the slot it lands on, and overwrites it with
/// `total + previous cumulative`. The difference between the written and the
/// evicted value is exactly the sum over the most recent K totals,
/// zero-padded until K segments have closed. Eviction and insertion happen in
/// the same step, which is what keeps the window at exactly K.
#[derive(Debug)]
pub struct TrailingSpan {
    sums: Vec<u64>,
    cursor: usize,
    trailing: u64,
}

impl TrailingSpan {
    pub fn new(segment_secs: u64, span_secs: u64) -> Result<Self, ConfigError> {
        if segment_secs == 0 || span_secs / segment_secs < 1 {
            return Err(ConfigError::InvalidSpan {
                segment_secs,
                span_secs,
            });
        }

        // Truncating division: a 125s span over 10s segments covers 12.
        let segments_in_span = (span_secs / segment_secs) as usize;

        Ok(Self {
            sums: vec![0; segments_in_span],
            cursor: segments_in_span - 1,
            trailing: 0,
        })
    }

    /// Record one closed segment total.
    pub fn push(&mut self, total: u64) {
        let next = (self.cursor + 1) % self.sums.len();
        let evicted = self.sums[next];
        self.sums[next] = total + self.sums[self.cursor];
        self.trailing = self.sums[next] - evicted;
        self.cursor = next;
    }

    /// Sum of the most recent K pushed totals; the sum of all pushes while
    /// fewer than K have occurred.
    pub fn trailing_total(&self) -> u64 {
        self.trailing
    }

    /// K: how many segments make up the alerting span.
    pub fn segments_in_span(&self) -> usize {
        self.sums.len()
    }
}
