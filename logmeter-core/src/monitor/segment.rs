use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;

/// One (section, count) entry of a segment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCount {
    pub section: String,
    pub count: u64,
}

/// One fixed-duration reporting window: per-section hit counts plus a total.
#[derive(Debug)]
pub struct Segment {
    start: DateTime<Utc>,
    total: u64,
    hits: HashMap<String, u64>,
}

impl Segment {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            total: 0,
            hits: HashMap::new(),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count one hit against `section`. Any string is accepted.
    pub fn add_hit(&mut self, section: &str) {
        *self.hits.entry(section.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Up to `n` sections by descending hit count. Ties break on section name
    /// so repeated runs of the same input render identically.
    pub fn top_sections(&self, n: usize) -> Vec<SectionCount> {
        if n == 0 {
            return Vec::new();
        }

        let mut counts: Vec<SectionCount> = self
            .hits
            .iter()
            .map(|(section, count)| SectionCount {
                section: section.clone(),
                count: *count,
            })
            .collect();

        counts.sort_by(|a, b| {
            (Reverse(a.count), a.section.as_str()).cmp(&(Reverse(b.count), b.section.as_str()))
        });
        counts.truncate(n);

        counts
    }
}
