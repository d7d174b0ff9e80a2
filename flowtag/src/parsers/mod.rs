pub mod flow_log_parser;
pub mod lookup_parser;
