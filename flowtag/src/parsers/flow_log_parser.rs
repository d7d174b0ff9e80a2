use crate::error::FlowTagError;
use crate::lookup_table::LookupTable;
use crate::tally::FlowTally;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub struct FlowLogParser;

impl FlowLogParser {
    /// Streams the flow log at `file_path` line by line and tallies every
    /// TCP or UDP record against `lookup`.
    pub fn aggregate(
        &self,
        file_path: &str,
        lookup: &LookupTable,
    ) -> Result<FlowTally, FlowTagError> {
        debug!("Opening the flow log: {:?} ...", file_path);

        let file_error = |source| FlowTagError::File {
            path: file_path.to_string(),
            source,
        };

        let file = File::open(file_path).map_err(file_error)?;
        self.aggregate_reader(BufReader::new(file), lookup)
            .map_err(file_error)
    }

    /// Same as [`FlowLogParser::aggregate`] over any buffered reader.
    pub fn aggregate_reader<R: BufRead>(
        &self,
        reader: R,
        lookup: &LookupTable,
    ) -> std::io::Result<FlowTally> {
        let mut tally = FlowTally::new();
        for line in reader.lines() {
            tally.process_line(&line?, lookup);
        }

        debug!(
            "Read {} lines, accepted {} flow records",
            tally.lines_read, tally.accepted
        );
        Ok(tally)
    }
}
