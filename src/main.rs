use account_collator::utils::{logger, validation::Validate};
use account_collator::{CliConfig, CollationOutcome, EtlEngine};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting account-collator");
    tracing::debug!("CLI args: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    let engine = EtlEngine::from_config(&config, config.monitor);

    match engine.run().await {
        Ok(CollationOutcome::Completed(summary)) => {
            println!(
                "✅ Wrote {} rows to {}",
                summary.rows_written,
                config
                    .output_path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default()
            );
        }
        Ok(CollationOutcome::Skipped { missing }) => {
            println!("⚠️  Nothing to do: no {} given", missing.describe());
        }
        Err(e) => {
            tracing::error!(
                "❌ Collation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }
}
