pub mod flow_record;
pub mod lookup_record;
pub mod port_protocol;
