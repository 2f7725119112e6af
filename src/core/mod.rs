pub mod collator;
pub mod dates;
pub mod etl;

pub use crate::domain::model::{CollationOutcome, CollationSummary, CombinedRecord, InputRecord};
pub use crate::domain::ports::{ConfigProvider, RecordSink, StatusFetcher};
pub use crate::utils::error::Result;
