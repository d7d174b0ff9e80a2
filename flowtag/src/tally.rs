use std::collections::HashMap;

use crate::lookup_table::LookupTable;
use crate::records::{flow_record::FlowRecord, port_protocol::PortProtocol};

/// Counters accumulated over one flow log.
///
/// Every accepted record bumps exactly one tag counter and exactly one
/// port/protocol counter, so both maps always sum to `accepted`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowTally {
    pub tag_counts: HashMap<String, u64>,
    pub port_protocol_counts: HashMap<PortProtocol, u64>,
    pub lines_read: u64,
    pub accepted: u64,
}

impl FlowTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw line. Lines that do not parse into a [`FlowRecord`] are
    /// dropped without being counted anywhere except `lines_read`.
    pub fn process_line(&mut self, line: &str, lookup: &LookupTable) {
        self.lines_read += 1;

        let Some(record) = FlowRecord::from_line(line) else {
            return;
        };
        let key = record.key();
        let tag = lookup.tag_for(&key).to_string();

        *self.port_protocol_counts.entry(key).or_insert(0) += 1;
        *self.tag_counts.entry(tag).or_insert(0) += 1;
        self.accepted += 1;
    }

    /// Tag counts ordered by tag.
    pub fn sorted_tag_counts(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .tag_counts
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Port/protocol counts ordered by port string, then protocol.
    pub fn sorted_port_protocol_counts(&self) -> Vec<(&PortProtocol, u64)> {
        let mut rows: Vec<(&PortProtocol, u64)> = self
            .port_protocol_counts
            .iter()
            .map(|(key, count)| (key, *count))
            .collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }
}
