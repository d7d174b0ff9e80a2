mod args;
mod error;
mod lookup_table;
mod output;
mod parsers;
mod records;
mod tally;
mod tests;

use args::{Cli, ConfigFile, OutputConfig};
use clap::Parser;
use error::FlowTagError;
use log::{debug, info, warn};
use output::OutputWriter;
use parsers::{flow_log_parser::FlowLogParser, lookup_parser::LookupParser};

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{}", error_message(&err));
        std::process::exit(FAILURE_EXIT_CODE);
    }
}

/// Exit status for usage errors and for failures while processing.
const FAILURE_EXIT_CODE: i32 = 1;

/// Usage errors exit with 1, `--help` and `--version` with 0.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        FAILURE_EXIT_CODE
    } else {
        0
    }
}

/// The line printed to stderr when loading or aggregation fails.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Resolves the output options, either from the command line or from the
/// configuration file when one is given.
fn resolve_output(
    cli_output: OutputConfig,
    config_file: Option<&str>,
) -> Result<OutputConfig, FlowTagError> {
    let Some(config_path) = config_file else {
        return Ok(cli_output);
    };

    debug!("Loading configuration file: {:?}", config_path);
    // confy writes a default file for a missing path; refuse instead
    std::fs::metadata(config_path).map_err(|source| FlowTagError::File {
        path: config_path.to_string(),
        source,
    })?;

    confy::load_path::<ConfigFile>(config_path)
        .map(|cfg_file| cfg_file.output)
        .map_err(|source| FlowTagError::Config {
            path: config_path.to_string(),
            source,
        })
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = resolve_output(cli.output, cli.config_file.as_deref())?;

    let lookup = LookupParser.parse(&cli.lookup_table)?;
    if lookup.is_empty() {
        warn!(
            "Lookup table {:?} has no entries, every flow will be {}",
            cli.lookup_table,
            lookup_table::UNTAGGED
        );
    }

    let tally = FlowLogParser.aggregate(&cli.flow_log, &lookup)?;
    info!(
        "Tallied {} flow records into {} tags and {} port/protocol combinations",
        tally.accepted,
        tally.tag_counts.len(),
        tally.port_protocol_counts.len()
    );

    // The report is only produced once both inputs were read in full
    let mut output_writer = OutputWriter::new(output.output, output.export_path.as_deref())?;
    output_writer.write_report(&tally)?;
    output_writer.flush_and_close()?;

    Ok(())
}
