use cucumber::World;
use std::collections::HashMap;
use top_issues::config::Config;
use top_issues::error::RankError;
use top_issues::run::RunSummary;

mod mock;

#[derive(Debug, Default, World)]
pub struct RankingWorld {
    pub env: HashMap<String, String>,
    pub workdir: Option<tempfile::TempDir>,
    pub source: mock::MockSource,
    pub config_result: Option<Result<Config, RankError>>,
    pub run_result: Option<Result<RunSummary, RankError>>,
}

#[tokio::main]
async fn main() {
    RankingWorld::run("features").await;
}
