use crate::domain::model::CombinedRecord;
use crate::domain::ports::RecordSink;
use crate::utils::error::Result;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Writes combined rows to the output file, header first.
///
/// Every row is flushed as it is appended, so a run that stops early leaves
/// the rows written so far on disk.
pub struct OutputWriter {
    writer: Writer<File>,
}

impl OutputWriter {
    pub fn create(path: &Path, delimiter: u8) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(file);

        writer.write_record(CombinedRecord::HEADER)?;
        writer.flush()?;
        tracing::debug!("Created output file: {}", path.display());

        Ok(Self { writer })
    }
}

impl RecordSink for OutputWriter {
    fn append(&mut self, record: &CombinedRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}
