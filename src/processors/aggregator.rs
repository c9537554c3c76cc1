use crate::models::{ObservationRecord, RegionStats};
use std::collections::HashMap;

/// Per-region accumulators kept in the order their codes were first seen
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    regions: Vec<RegionStats>,
    index: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a record into its region, creating the region on first sighting
    pub fn fold(&mut self, record: &ObservationRecord) {
        let slot = match self.index.get(record.region.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = self.regions.len();
                self.regions.push(RegionStats::new(record.region.clone()));
                self.index.insert(record.region.clone(), slot);
                slot
            }
        };

        self.regions[slot].fold(record);
    }

    /// Read-only view of every region in first-seen order
    pub fn snapshot(&self) -> &[RegionStats] {
        &self.regions
    }

    pub fn region(&self, code: &str) -> Option<&RegionStats> {
        self.index.get(code).map(|&slot| &self.regions[slot])
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn total_records(&self) -> u64 {
        self.regions.iter().map(|r| r.record_count).sum()
    }
}
