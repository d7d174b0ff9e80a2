use std::{
    fs::File,
    io::{BufWriter, Write},
};

use crate::{args::ExportMethodType, error::FlowTagError, tally::FlowTally};
use log::debug;

/// Column header of the CSV export.
pub const CSV_HEADER: [&str; 4] = ["section", "key", "protocol", "count"];

pub struct OutputWriter {
    export_type: ExportMethodType,
    writer: BufWriter<Box<dyn Write>>,
}

impl OutputWriter {
    /// Opens the report destination: stdout for `Print`, `file_path` for `Csv`.
    pub fn new(
        export_type: ExportMethodType,
        file_path: Option<&str>,
    ) -> Result<Self, FlowTagError> {
        let writer: BufWriter<Box<dyn Write>> = match (export_type, file_path) {
            (ExportMethodType::Csv, Some(path)) => {
                debug!("Writing CSV report to {:?}", path);
                let file = File::create(path).map_err(|source| FlowTagError::File {
                    path: path.to_string(),
                    source,
                })?;
                BufWriter::new(Box::new(file))
            }
            // clap enforces the path for Csv; a config file may still omit it
            (ExportMethodType::Csv, None) => {
                debug!("No export path given, writing CSV report to stdout");
                BufWriter::new(Box::new(std::io::stdout()))
            }
            (ExportMethodType::Print, _) => BufWriter::new(Box::new(std::io::stdout())),
        };

        Ok(OutputWriter::from_writer(export_type, writer))
    }

    pub fn from_writer(export_type: ExportMethodType, writer: BufWriter<Box<dyn Write>>) -> Self {
        OutputWriter {
            export_type,
            writer,
        }
    }

    pub fn write_report(&mut self, tally: &FlowTally) -> Result<(), FlowTagError> {
        match self.export_type {
            ExportMethodType::Print => write_text_report(&mut self.writer, tally)?,
            ExportMethodType::Csv => write_csv_report(&mut self.writer, tally)?,
        }
        Ok(())
    }

    /// Flushes the writer and closes the output file
    pub fn flush_and_close(&mut self) -> Result<(), FlowTagError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the two fixed-width tables: tags, then port/protocol pairs.
pub fn write_text_report<W: Write>(out: &mut W, tally: &FlowTally) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "Tag             Count")?;
    writeln!(out, "{}", "-".repeat(20))?;
    for (tag, count) in tally.sorted_tag_counts() {
        writeln!(out, "{:<15} {}", tag, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "Port    Protocol        Count")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (key, count) in tally.sorted_port_protocol_counts() {
        writeln!(out, "{:<8} {:<15} {}", key.port, key.protocol, count)?;
    }

    Ok(())
}

/// Writes both tables into one CSV, tag rows first.
pub fn write_csv_report<W: Write>(out: &mut W, tally: &FlowTally) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;

    for (tag, count) in tally.sorted_tag_counts() {
        let count = count.to_string();
        wtr.write_record(["tag", tag, "", count.as_str()])?;
    }
    for (key, count) in tally.sorted_port_protocol_counts() {
        let count = count.to_string();
        wtr.write_record([
            "port_protocol",
            key.port.as_str(),
            key.protocol.as_str(),
            count.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
