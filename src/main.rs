use clap::Parser;
use records_api::utils::error::ErrorSeverity;
use records_api::utils::{logger, validation::Validate};
use records_api::{load_config, CliConfig, EtlEngine, LocalStorage, RecordPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting records-api CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 設定檔不存在時使用空設定，其他錯誤直接結束
    let record_config = match load_config(&config.config) {
        Ok(record_config) => record_config,
        Err(e) => {
            tracing::error!("❌ Failed to load record config: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    let storage = LocalStorage::new(".".to_string());
    let pipeline = RecordPipeline::new(storage, config, record_config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Records processed successfully!");
            println!("✅ Records processed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
