/// A (destination port, protocol name) pair.
///
/// Used both as the lookup table key and as the key of the per-combination
/// tally. Fields are compared in declaration order, so sorting orders by the
/// port string first: `"100"` sorts before `"23"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortProtocol {
    pub port: String,
    pub protocol: String,
}

impl PortProtocol {
    pub fn new(port: &str, protocol: &str) -> Self {
        PortProtocol {
            port: port.to_string(),
            protocol: protocol.to_string(),
        }
    }
}
