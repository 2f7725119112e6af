use crate::domain::model::{CombinedRecord, LookupOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Looks up the status of one account. Implementations absorb every lookup
/// failure into `LookupOutcome::NotFound`; they never return an error.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self, account_id: i64) -> LookupOutcome;
}

pub trait RecordSink {
    fn append(&mut self, record: &CombinedRecord) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&Path>;
    fn output_path(&self) -> Option<&Path>;
    fn api_base_url(&self) -> &str;
    fn delimiter(&self) -> u8;
}

#[async_trait]
impl<T: StatusFetcher + ?Sized> StatusFetcher for std::sync::Arc<T> {
    async fn fetch(&self, account_id: i64) -> LookupOutcome {
        (**self).fetch(account_id).await
    }
}
