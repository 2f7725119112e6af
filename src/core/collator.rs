use crate::adapters::{InputReader, OutputWriter};
use crate::core::dates::normalize_iso_date;
use crate::domain::model::{
    CollationOutcome, CollationSummary, CombinedRecord, InputRecord, LookupOutcome, MissingPath,
};
use crate::domain::ports::{RecordSink, StatusFetcher};
use crate::utils::error::{CollateError, Result};
use std::path::Path;

/// Joins each input row with its status lookup and streams the result out.
///
/// Rows are handled strictly in input order with one awaited lookup per row.
pub struct Collator<F: StatusFetcher> {
    fetcher: F,
    delimiter: u8,
}

impl<F: StatusFetcher> Collator<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Runs the full file-to-file collation.
    ///
    /// A missing or empty path is not an error: nothing is opened, fetched or
    /// written and `CollationOutcome::Skipped` is returned. A malformed input
    /// row stops the run; rows already written stay in the output file.
    pub async fn collate(
        &self,
        input_path: Option<&Path>,
        output_path: Option<&Path>,
    ) -> Result<CollationOutcome> {
        let (input_path, output_path) = match (present(input_path), present(output_path)) {
            (Some(input), Some(output)) => (input, output),
            (input, output) => {
                let missing = match (input, output) {
                    (None, None) => MissingPath::Both,
                    (None, Some(_)) => MissingPath::Input,
                    _ => MissingPath::Output,
                };
                tracing::warn!("Skipping collation: no {} given", missing.describe());
                return Ok(CollationOutcome::Skipped { missing });
            }
        };

        tracing::info!(
            "Collating {} into {}",
            input_path.display(),
            output_path.display()
        );

        let mut writer = OutputWriter::create(output_path, self.delimiter)?;
        let reader = InputReader::open(input_path, self.delimiter)?;
        let summary = self.collate_records(reader, &mut writer).await?;

        Ok(CollationOutcome::Completed(summary))
    }

    /// Merges a stream of parsed records into `sink`, stopping at the first error.
    pub async fn collate_records<I, S>(&self, records: I, sink: &mut S) -> Result<CollationSummary>
    where
        I: IntoIterator<Item = Result<InputRecord>>,
        S: RecordSink,
    {
        let mut summary = CollationSummary::default();

        for record in records {
            let record = record?;
            let outcome = self.fetcher.fetch(record.account_id).await;
            if !outcome.is_found() {
                summary.lookups_missed += 1;
            }

            let combined = merge(record, outcome)?;
            tracing::debug!(
                "Account {}: status='{}' set_on='{}'",
                combined.account_id,
                combined.status,
                combined.status_set_on
            );
            sink.append(&combined)?;
            summary.rows_written += 1;
        }

        Ok(summary)
    }
}

fn present(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Builds the output row. Absent or empty lookup fields become empty strings.
pub fn merge(record: InputRecord, outcome: LookupOutcome) -> Result<CombinedRecord> {
    let (status, status_set_on) = match outcome {
        LookupOutcome::Found(found) => {
            let status = found.status.filter(|s| !s.is_empty()).unwrap_or_default();
            let status_set_on = match found.created_on.filter(|s| !s.is_empty()) {
                Some(raw) => normalize_iso_date(&raw).ok_or_else(|| {
                    CollateError::MalformedStatusDate {
                        account_id: record.account_id,
                        value: raw.clone(),
                    }
                })?,
                None => String::new(),
            };
            (status, status_set_on)
        }
        LookupOutcome::NotFound => (String::new(), String::new()),
    };

    Ok(CombinedRecord::new(record, status, status_set_on))
}
