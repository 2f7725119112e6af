//! Streaming reader over the account input file.
//!
//! The first line is a header and is discarded. Every later row yields one
//! `InputRecord`: the account id from the first field, the display name from
//! the third, and the creation date from the last field reformatted from
//! `MM/DD/YY` to `YYYY-MM-DD`. A bad row is yielded as `MalformedRecord` with
//! its line number; the caller decides whether to stop.
//!
//! The file stays open for as long as the reader is alive.

use crate::core::dates::reformat_input_date;
use crate::domain::model::InputRecord;
use crate::utils::error::{CollateError, Result};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::path::Path;

const ACCOUNT_ID_FIELD: usize = 0;
const DISPLAY_NAME_FIELD: usize = 2;
const MIN_FIELDS: usize = DISPLAY_NAME_FIELD + 1;

pub struct InputReader {
    records: StringRecordsIntoIter<File>,
}

impl InputReader {
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path)?;
        tracing::debug!("Opened input file: {}", path.display());

        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl Iterator for InputReader {
    type Item = Result<InputRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(CollateError::CsvError(e))),
            };

            if is_placeholder(&record) {
                tracing::debug!("Skipping empty row at line {}", line_of(&record));
                continue;
            }

            return Some(parse_record(&record));
        }
    }
}

fn is_placeholder(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_record(record: &StringRecord) -> Result<InputRecord> {
    let line = line_of(record);

    if record.len() < MIN_FIELDS {
        return Err(CollateError::malformed(
            line,
            format!("expected at least {} fields, found {}", MIN_FIELDS, record.len()),
        ));
    }

    let raw_id = &record[ACCOUNT_ID_FIELD];
    let account_id = raw_id.trim().parse::<i64>().map_err(|_| {
        CollateError::malformed(line, format!("account id '{}' is not an integer", raw_id))
    })?;

    let raw_date = &record[record.len() - 1];
    let created_on = reformat_input_date(raw_date).ok_or_else(|| {
        CollateError::malformed(line, format!("date '{}' does not match MM/DD/YY", raw_date))
    })?;

    Ok(InputRecord {
        account_id,
        display_name: record[DISPLAY_NAME_FIELD].to_string(),
        created_on,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Account ID,Account Name,First Name,Created On\n";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn read_all(content: &str) -> Vec<Result<InputRecord>> {
        let file = create_temp_csv(content);
        InputReader::open(file.path(), b',').unwrap().collect()
    }

    #[test]
    fn test_reads_records_in_order() {
        let content = format!(
            "{}12345,lexcorp,Lex,01/12/11\n8172,Wayne Enterprises,Victor,11/19/14\n1924,Hooli,Max,02/29/12\n",
            HEADER
        );
        let records: Vec<InputRecord> = read_all(&content).into_iter().map(|r| r.unwrap()).collect();

        assert_eq!(
            records,
            vec![
                InputRecord {
                    account_id: 12345,
                    display_name: "Lex".to_string(),
                    created_on: "2011-01-12".to_string(),
                },
                InputRecord {
                    account_id: 8172,
                    display_name: "Victor".to_string(),
                    created_on: "2014-11-19".to_string(),
                },
                InputRecord {
                    account_id: 1924,
                    display_name: "Max".to_string(),
                    created_on: "2012-02-29".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_header_only_file_yields_nothing() {
        assert!(read_all(HEADER).is_empty());
    }

    #[test]
    fn test_date_is_taken_from_last_field() {
        let content = format!("{}48213,Acme,Wilson,extra,07/07/15\n", HEADER);
        let records = read_all(&content);
        assert_eq!(records[0].as_ref().unwrap().created_on, "2015-07-07");
    }

    #[test]
    fn test_display_name_is_verbatim() {
        let content = format!("{}222222,\"League, Inc\",\"Ra's \",03/01/12\n", HEADER);
        let records = read_all(&content);
        assert_eq!(records[0].as_ref().unwrap().display_name, "Ra's ");
    }

    #[test]
    fn test_non_numeric_account_id_is_malformed() {
        let content = format!("{}abc,lexcorp,Lex,01/12/11\n", HEADER);
        let records = read_all(&content);
        match &records[0] {
            Err(CollateError::MalformedRecord { line, reason }) => {
                assert_eq!(*line, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let content = format!("{}12345,lexcorp,Lex,2011-01-12\n", HEADER);
        let records = read_all(&content);
        assert!(matches!(
            records[0],
            Err(CollateError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_one_digit_year_or_padded_date_is_malformed() {
        let content = format!("{}12345,lexcorp,Lex,01/12/1\n8172,Wayne,Victor, 11/19/14\n", HEADER);
        let records = read_all(&content);
        assert!(matches!(records[0], Err(CollateError::MalformedRecord { line: 2, .. })));
        assert!(matches!(records[1], Err(CollateError::MalformedRecord { line: 3, .. })));
    }

    #[test]
    fn test_sixty_nine_is_nineteen_sixty_nine() {
        let content = format!("{}12345,lexcorp,Lex,01/01/69\n8172,Wayne,Victor,01/01/68\n", HEADER);
        let records = read_all(&content);
        assert_eq!(records[0].as_ref().unwrap().created_on, "1969-01-01");
        assert_eq!(records[1].as_ref().unwrap().created_on, "2068-01-01");
    }

    #[test]
    fn test_short_row_is_malformed() {
        let content = format!("{}12345,01/12/11\n", HEADER);
        let records = read_all(&content);
        assert!(matches!(records[0], Err(CollateError::MalformedRecord { .. })));
    }

    #[test]
    fn test_placeholder_rows_are_skipped() {
        let content = format!("{}12345,lexcorp,Lex,01/12/11\n,,,\n\n88888,Oscorp,Otto,08/08/13\n", HEADER);
        let ids: Vec<i64> = read_all(&content)
            .into_iter()
            .map(|r| r.unwrap().account_id)
            .collect();
        assert_eq!(ids, vec![12345, 88888]);
    }

    #[test]
    fn test_reads_after_malformed_row_continue() {
        let content = format!("{}x,lexcorp,Lex,01/12/11\n8172,Wayne,Victor,11/19/14\n", HEADER);
        let records = read_all(&content);
        assert_eq!(records.len(), 2);
        assert!(records[0].is_err());
        assert_eq!(records[1].as_ref().unwrap().account_id, 8172);
    }

    #[test]
    fn test_custom_delimiter() {
        let file = create_temp_csv("id\tcompany\tname\tcreated\n918299\tOscorp\tNorman\t04/29/14\n");
        let records: Vec<_> = InputReader::open(file.path(), b'\t').unwrap().collect();
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.account_id, 918299);
        assert_eq!(record.display_name, "Norman");
        assert_eq!(record.created_on, "2014-04-29");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = InputReader::open(Path::new("does-not-exist.csv"), b',');
        assert!(matches!(result, Err(CollateError::IoError(_))));
    }
}
