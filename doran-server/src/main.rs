use anyhow::Result;
use doran_core::SystemClock;
use doran_server::config::ServerConfig;
use doran_server::http::rate_limit::IpRateLimiter;
use doran_server::http::{api_router, serve, AppState};
use doran_server::pipeline::ChatPipeline;
use intent::LlmIntentClassifier;
use llm_client::{EnvLlmConfig, OpenAILlmClient};
use std::sync::Arc;
use std::time::Instant;
use storage::{ChatMessageRepository, MoodRecordRepository, SavedChartRepository, SqlitePoolManager};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;
    doran_core::init_tracing(&config.log_file)?;

    let llm_config = EnvLlmConfig::from_env()?;
    let llm: Arc<dyn llm_client::LlmClient> = Arc::new(OpenAILlmClient::from_config(&llm_config));
    let classifier = Arc::new(LlmIntentClassifier::new(llm.clone()));

    let pool_manager = SqlitePoolManager::new(&config.database_url).await?;
    let chat_repo = ChatMessageRepository::new(pool_manager.clone()).await?;
    let mood_repo = MoodRecordRepository::new(pool_manager.clone()).await?;
    let chart_repo = SavedChartRepository::new(pool_manager.clone()).await?;

    let pipeline = Arc::new(ChatPipeline::new(
        classifier,
        llm,
        chat_repo.clone(),
        mood_repo.clone(),
        chart_repo,
        Arc::new(SystemClock),
    ));

    let state = AppState {
        pipeline,
        chat_repo,
        mood_repo,
        pool_manager,
        started_at: Instant::now(),
    };
    let limiter = Arc::new(IpRateLimiter::new(config.rate_limit_per_minute));

    info!(port = config.port, "Starting doran server");
    serve(api_router(state, limiter), config.port).await
}
