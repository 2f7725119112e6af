use crate::adapters::HttpStatusFetcher;
use crate::core::collator::Collator;
use crate::domain::model::CollationOutcome;
use crate::domain::ports::{ConfigProvider, StatusFetcher};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;
use std::time::Instant;

/// Runs one collation with timing, optional resource monitoring and a summary log.
pub struct EtlEngine<F: StatusFetcher> {
    collator: Collator<F>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    monitor: SystemMonitor,
}

impl EtlEngine<HttpStatusFetcher> {
    pub fn from_config<C: ConfigProvider>(config: &C, monitor_enabled: bool) -> Self {
        let collator = Collator::new(HttpStatusFetcher::new(config.api_base_url()))
            .with_delimiter(config.delimiter());
        Self::new_with_monitoring(collator, config, monitor_enabled)
    }
}

impl<F: StatusFetcher> EtlEngine<F> {
    pub fn new_with_monitoring<C: ConfigProvider>(
        collator: Collator<F>,
        config: &C,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            collator,
            input_path: config.input_path().map(PathBuf::from),
            output_path: config.output_path().map(PathBuf::from),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<CollationOutcome> {
        let started = Instant::now();
        tracing::info!("Starting collation");
        if self.monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }
        self.monitor.log_stats("Start");

        let outcome = self
            .collator
            .collate(self.input_path.as_deref(), self.output_path.as_deref())
            .await;

        self.monitor.log_stats("Collate");

        match &outcome {
            Ok(CollationOutcome::Completed(summary)) => {
                tracing::info!(
                    "Wrote {} rows ({} without status) in {:?}",
                    summary.rows_written,
                    summary.lookups_missed,
                    started.elapsed()
                );
            }
            Ok(CollationOutcome::Skipped { missing }) => {
                tracing::info!("Nothing collated: {} missing", missing.describe());
            }
            Err(e) => {
                tracing::error!("Collation stopped after {:?}: {}", started.elapsed(), e);
            }
        }

        self.monitor.log_final_stats();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollatorConfig;
    use crate::domain::model::{LookupOutcome, MissingPath, StatusRecord};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct EveryoneGood;

    #[async_trait]
    impl StatusFetcher for EveryoneGood {
        async fn fetch(&self, _account_id: i64) -> LookupOutcome {
            LookupOutcome::Found(StatusRecord {
                status: Some("good".to_string()),
                created_on: Some("2016-1-5".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_engine_runs_collator_over_configured_paths() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(
            &input,
            "Account ID,Account Name,First Name,Created On\n12345,lexcorp,Lex,01/12/11\n",
        )
        .unwrap();

        let config = CollatorConfig {
            input_path: Some(input),
            output_path: Some(output.clone()),
            ..CollatorConfig::default()
        };
        let engine = EtlEngine::new_with_monitoring(Collator::new(EveryoneGood), &config, false);

        let outcome = engine.run().await.unwrap();
        assert!(matches!(
            outcome,
            CollationOutcome::Completed(ref summary) if summary.rows_written == 1
        ));

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            content.lines().nth(1),
            Some("12345,Lex,2011-01-12,good,2016-01-05")
        );
    }

    #[tokio::test]
    async fn test_engine_with_monitoring_skips_missing_output() {
        let config = CollatorConfig {
            input_path: Some(PathBuf::from("accounts.csv")),
            ..CollatorConfig::default()
        };
        let engine = EtlEngine::new_with_monitoring(Collator::new(EveryoneGood), &config, true);

        let outcome = engine.run().await.unwrap();
        assert!(matches!(
            outcome,
            CollationOutcome::Skipped {
                missing: MissingPath::Output
            }
        ));
    }
}
