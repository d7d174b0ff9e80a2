use std::collections::HashMap;

use crate::records::port_protocol::PortProtocol;

/// Tag recorded for flows whose port and protocol have no lookup entry.
pub const UNTAGGED: &str = "Untagged";

/// Exact-match mapping from (port, protocol) to tag.
///
/// Filled once by the lookup parser and only read afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<PortProtocol, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. A key seen before is overwritten, so the last row of the
    /// file wins.
    pub(crate) fn insert(&mut self, key: PortProtocol, tag: String) {
        self.entries.insert(key, tag);
    }

    /// Returns the tag for `key`, or [`UNTAGGED`] when there is none.
    pub fn tag_for(&self, key: &PortProtocol) -> &str {
        self.get(key).unwrap_or(UNTAGGED)
    }

    pub fn get(&self, key: &PortProtocol) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
