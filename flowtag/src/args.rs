use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// The relative path to the flow log file
    pub flow_log: String,

    /// The relative path to the lookup table CSV file
    pub lookup_table: String,

    /// Load the output options from a TOML configuration file
    #[clap(long)]
    pub config_file: Option<String>,

    /// Output method
    #[clap(flatten)]
    pub output: OutputConfig,
}

/// Options read from `--config-file`. They replace the command-line output
/// options when present.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ConfigFile {
    pub output: OutputConfig,
}

#[derive(Args, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// Output method
    #[clap(short, long, value_enum, default_value_t = ExportMethodType::Print)]
    #[serde(default)]
    pub output: ExportMethodType,

    /// File path for output (used if method is Csv)
    #[clap(long, required_if_eq("output", "csv"))]
    #[serde(default)]
    pub export_path: Option<String>,
}

#[derive(clap::ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethodType {
    /// The report will be printed to the console
    #[default]
    Print,

    /// The report will be written to a CSV file
    Csv,
}
