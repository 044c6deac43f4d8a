use serde_json::Value;
use std::sync::Mutex;
use top_issues::error::RankError;
use top_issues::github::fetch::{Page, PageSource};

/// In-memory issue listing that splits its issues into linked pages.
#[derive(Debug, Default)]
pub struct MockSource {
    pub issues: Vec<Value>,
    pub page_size: Option<usize>,
    pub failure: Option<(u16, String)>,
    pub requested: Mutex<Vec<String>>,
}

const NEXT_PREFIX: &str = "mock://issues?page=";

impl MockSource {
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl PageSource for MockSource {
    async fn fetch_page(&self, url: &str) -> Result<Page, RankError> {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(url.to_string());

        if let Some((status, message)) = &self.failure {
            return Err(RankError::Fetch {
                status: Some(*status),
                message: message.clone(),
            });
        }

        let page_size = self.page_size.unwrap_or(100).max(1);
        let page: usize = url
            .strip_prefix(NEXT_PREFIX)
            .and_then(|page| page.parse().ok())
            .unwrap_or(0);
        let start = (page * page_size).min(self.issues.len());
        let end = (start + page_size).min(self.issues.len());
        let next = (end < self.issues.len()).then(|| format!("{NEXT_PREFIX}{}", page + 1));

        Ok(Page {
            issues: self.issues[start..end].to_vec(),
            next,
        })
    }
}
