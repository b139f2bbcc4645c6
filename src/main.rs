use clap::Parser;
use cobj_portal::utils::logger;
use cobj_portal::{web, CliConfig, HubSpotClient, RecordStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cobj-portal");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置，缺少 token 或 object type 時直接結束
    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = HubSpotClient::new(&settings)?;
    tracing::info!("Using HubSpot collection {}", client.collection_url());
    let store: Arc<dyn RecordStore> = Arc::new(client);

    web::serve(&settings, store).await?;
    Ok(())
}
