use crate::error::FlowTagError;
use crate::lookup_table::LookupTable;
use crate::records::lookup_record::{LookupRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::collections::HashMap;
use std::fs::File;

pub struct LookupParser;

/// Positions of `dstport`, `protocol` and `tag` in the header, in that order.
/// Header names are matched exactly; when a name repeats, the last column
/// carrying it is used. Returns the first required column that is absent.
fn locate_columns(headers: &StringRecord) -> Result<[usize; 3], &'static str> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        positions.insert(header, index);
    }

    let mut located = [0; 3];
    for (slot, column) in located.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = *positions.get(column).ok_or(column)?;
    }
    Ok(located)
}

/// Picks the required fields out of `record`. Fields past the header are
/// ignored; a row too short to hold a required column yields that column.
fn select_fields(
    record: &StringRecord,
    columns: &[usize; 3],
) -> Result<StringRecord, &'static str> {
    let mut selected = StringRecord::new();
    for (&index, column) in columns.iter().zip(REQUIRED_COLUMNS) {
        selected.push_field(record.get(index).ok_or(column)?);
    }
    Ok(selected)
}

impl LookupParser {
    /// Loads the lookup table at `file_path`.
    ///
    /// Values are kept exactly as written, apart from the protocol being
    /// lowercased. The whole load fails on the first row missing a required
    /// field; rows are never skipped. Rows repeating a (port, protocol) key
    /// replace the earlier tag.
    pub fn parse(&self, file_path: &str) -> Result<LookupTable, FlowTagError> {
        debug!("Opening the lookup table: {:?} ...", file_path);

        let file = File::open(file_path).map_err(|source| FlowTagError::File {
            path: file_path.to_string(),
            source,
        })?;
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(file);

        let format_error = |source| FlowTagError::Format {
            path: file_path.to_string(),
            source,
        };

        let headers = rdr.headers().map_err(format_error)?.clone();
        let columns = locate_columns(&headers).map_err(|column| FlowTagError::MissingColumn {
            path: file_path.to_string(),
            column,
        })?;
        let selected_headers = StringRecord::from(REQUIRED_COLUMNS.to_vec());

        let mut table = LookupTable::new();
        for result in rdr.records() {
            let record = result.map_err(format_error)?;
            let selected = select_fields(&record, &columns).map_err(|column| {
                FlowTagError::MissingField {
                    path: file_path.to_string(),
                    line: record.position().map_or(0, |pos| pos.line()),
                    column,
                }
            })?;
            let row: LookupRecord = selected
                .deserialize(Some(&selected_headers))
                .map_err(format_error)?;

            table.insert(row.key(), row.tag);
        }

        debug!("Loaded {} lookup entries from {:?}", table.len(), file_path);
        Ok(table)
    }
}
