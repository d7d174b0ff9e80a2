use std::io;

use thiserror::Error;

/// Errors raised while loading the inputs or writing the report.
///
/// Malformed flow-log lines never show up here: they are dropped by the
/// aggregator without a diagnostic.
#[derive(Debug, Error)]
pub enum FlowTagError {
    /// An input file could not be opened or read.
    #[error("cannot read {path}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The lookup table header lacks one of `dstport`, `protocol` or `tag`.
    #[error("invalid lookup table format in {path}: missing column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    /// A lookup table row is too short to hold one of the required columns.
    #[error("invalid lookup table format in {path}: line {line} has no '{column}' field")]
    MissingField {
        path: String,
        line: u64,
        column: &'static str,
    },

    /// A lookup table row could not be parsed.
    #[error("invalid lookup table format in {path}")]
    Format {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The report could not be written to its destination.
    #[error("failed to write report")]
    Output(#[from] io::Error),

    /// The CSV report could not be encoded.
    #[error("failed to write CSV report")]
    CsvOutput(#[from] csv::Error),

    #[error("cannot load configuration file {path}")]
    Config {
        path: String,
        #[source]
        source: confy::ConfyError,
    },
}
