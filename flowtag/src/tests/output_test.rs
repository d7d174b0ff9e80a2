#[cfg(test)]
mod tests {
    use std::io::{BufWriter, Write};

    use crate::args::ExportMethodType;
    use crate::lookup_table::LookupTable;
    use crate::output::{write_csv_report, write_text_report, OutputWriter};
    use crate::parsers::flow_log_parser::FlowLogParser;
    use crate::parsers::lookup_parser::LookupParser;
    use crate::tally::FlowTally;
    use crate::tests::fixtures::{path_of, temp_file};

    fn small_tally() -> FlowTally {
        let lookup_file = temp_file("dstport,protocol,tag\n23,tcp,sv_P1\n");
        let lookup = LookupParser.parse(&path_of(&lookup_file)).unwrap();
        FlowLogParser
            .aggregate_reader(
                "a b c d e f 23 6\na b c d e f 999 17\n".as_bytes(),
                &lookup,
            )
            .unwrap()
    }

    fn text_report(tally: &FlowTally) -> String {
        let mut out = Vec::new();
        write_text_report(&mut out, tally).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_layout() {
        let expected = "\n\
Tag Counts:\n\
Tag             Count\n\
--------------------\n\
Untagged        1\n\
sv_P1           1\n\
\n\
Port/Protocol Combination Counts:\n\
Port    Protocol        Count\n\
------------------------------\n\
23       tcp             1\n\
999      udp             1\n";

        assert_eq!(text_report(&small_tally()), expected);
    }

    #[test]
    fn test_empty_report_keeps_headers() {
        let expected = "\nTag Counts:\nTag             Count\n--------------------\n\
\nPort/Protocol Combination Counts:\nPort    Protocol        Count\n------------------------------\n";

        assert_eq!(text_report(&FlowTally::new()), expected);
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let mut tally = FlowTally::new();
        let lookup = LookupTable::new();
        tally.process_line("a b c d e f 1234567890 6", &lookup);
        tally
            .tag_counts
            .insert("a_very_long_tag_name".to_string(), 7);

        let report = text_report(&tally);
        assert!(report.contains("\na_very_long_tag_name 7\n"));
        assert!(report.contains("\n1234567890 tcp             1\n"));
    }

    #[test]
    fn test_ports_render_in_string_order() {
        let lookup = LookupTable::new();
        let mut tally = FlowTally::new();
        for line in ["a b c d e f 23 6", "a b c d e f 100 6", "a b c d e f 3 17"] {
            tally.process_line(line, &lookup);
        }

        let report = text_report(&tally);
        let pos_100 = report.find("\n100 ").unwrap();
        let pos_23 = report.find("\n23 ").unwrap();
        let pos_3 = report.find("\n3 ").unwrap();
        assert!(pos_100 < pos_23);
        assert!(pos_23 < pos_3);
    }

    #[test]
    fn test_csv_report() {
        let mut out = Vec::new();
        write_csv_report(&mut out, &small_tally()).unwrap();

        let expected = "section,key,protocol,count\n\
tag,Untagged,,1\n\
tag,sv_P1,,1\n\
port_protocol,23,tcp,1\n\
port_protocol,999,udp,1\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_output_writer_to_buffer() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let handle = file.reopen().unwrap();
        let writer: BufWriter<Box<dyn Write>> = BufWriter::new(Box::new(handle));

        let mut output_writer = OutputWriter::from_writer(ExportMethodType::Print, writer);
        output_writer.write_report(&small_tally()).unwrap();
        output_writer.flush_and_close().unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, text_report(&small_tally()));
    }

    #[test]
    fn test_output_writer_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let path_str = path.to_string_lossy().into_owned();

        let mut output_writer =
            OutputWriter::new(ExportMethodType::Csv, Some(path_str.as_str())).unwrap();
        output_writer.write_report(&small_tally()).unwrap();
        output_writer.flush_and_close().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("section,key,protocol,count\n"));
        assert!(written.contains("port_protocol,999,udp,1\n"));
    }

    #[test]
    fn test_output_writer_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.csv");
        let path_str = path.to_string_lossy().into_owned();

        let result = OutputWriter::new(ExportMethodType::Csv, Some(path_str.as_str()));
        assert!(result.is_err());
    }
}
