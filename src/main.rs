use anyhow::Context;
use std::process::ExitCode;
use top_issues::config::Config;
use top_issues::error::RankError;

#[tokio::main]
async fn main() -> ExitCode {
    top_issues::logging::init_logging();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("❌ Error during script execution: {err:#}");
            if let Some(status) = err.downcast_ref::<RankError>().and_then(RankError::status) {
                tracing::error!("API Error Status: {status}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    top_issues::run::run(&config)
        .await
        .context("Failed to rank issues")?;
    Ok(())
}
