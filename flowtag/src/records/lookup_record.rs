use super::port_protocol::PortProtocol;
use serde::Deserialize;

/// Header names the lookup table must provide, in any order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["dstport", "protocol", "tag"];

#[derive(Debug, Deserialize)]
pub struct LookupRecord {
    #[serde(rename = "dstport")]
    pub dst_port: String,
    #[serde(rename = "protocol")]
    pub protocol: String,
    #[serde(rename = "tag")]
    pub tag: String,
}

impl LookupRecord {
    /// Key of this row, with the protocol lowercased so `TCP` and `tcp` match.
    pub fn key(&self) -> PortProtocol {
        PortProtocol::new(&self.dst_port, &self.protocol.to_lowercase())
    }
}
