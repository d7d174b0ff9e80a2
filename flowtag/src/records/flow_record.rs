use super::port_protocol::PortProtocol;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Position of the destination port in a flow-log line. The protocol number
/// follows it, so accepted lines have at least eight fields.
pub const DST_PORT_FIELD: usize = 6;

/// Transport protocols recognised in the flow log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// IANA protocol number as written in the flow log.
    pub fn number(self) -> &'static str {
        match self {
            Protocol::Tcp => "6",
            Protocol::Udp => "17",
        }
    }

    pub fn from_number(number: &str) -> Option<Self> {
        Protocol::iter().find(|protocol| protocol.number() == number)
    }
}

/// The parts of a flow-log line used for tagging.
///
/// Only the destination port and the protocol number are read; all other
/// fields, including any past the eighth, are ignored.
#[derive(Debug, PartialEq, Eq)]
pub struct FlowRecord<'a> {
    pub dst_port: &'a str,
    pub protocol: Protocol,
}

impl<'a> FlowRecord<'a> {
    /// Parses one line, returning `None` for lines that are too short or that
    /// carry a protocol other than TCP or UDP.
    pub fn from_line(line: &'a str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let dst_port = fields.nth(DST_PORT_FIELD)?;
        let protocol = Protocol::from_number(fields.next()?)?;

        Some(FlowRecord { dst_port, protocol })
    }

    pub fn key(&self) -> PortProtocol {
        PortProtocol::new(self.dst_port, self.protocol.as_ref())
    }
}
