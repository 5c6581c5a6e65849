use crate::domain::{
    bookmarks::{flatten, BookmarkNode},
    gateway::DataSourceGateway,
    models::{ActionItem, ExecuteRequest, ItemId, SourceOperation},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
struct PageEntry {
    #[serde(default)]
    id: Option<ItemId>,
    title: String,
    url: String,
}

impl From<PageEntry> for ActionItem {
    fn from(entry: PageEntry) -> Self {
        let mut item = ActionItem::page(entry.title, entry.url);
        item.id = entry.id;
        item
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Fixture {
    tabs: Vec<PageEntry>,
    bookmarks: Vec<BookmarkNode>,
    history: Vec<PageEntry>,
}

/// Serves tabs, bookmarks and history from a TOML snapshot and records
/// executed requests instead of touching a browser.
pub struct FixtureGateway {
    tabs: Vec<ActionItem>,
    bookmarks: Vec<ActionItem>,
    history: Vec<ActionItem>,
    executed: Mutex<Vec<ExecuteRequest>>,
}

impl FixtureGateway {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let fixture: Fixture = toml::from_str(content).context("Invalid fixture")?;
        Ok(Self {
            tabs: fixture.tabs.into_iter().map(ActionItem::from).collect(),
            bookmarks: flatten(&fixture.bookmarks),
            history: fixture.history.into_iter().map(ActionItem::from).collect(),
            executed: Mutex::new(Vec::new()),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub async fn executed(&self) -> Vec<ExecuteRequest> {
        self.executed.lock().await.clone()
    }
}

#[async_trait]
impl DataSourceGateway for FixtureGateway {
    async fn fetch(&self, source: SourceOperation) -> Result<Vec<ActionItem>> {
        let items = match source {
            SourceOperation::ListOpenTabs => &self.tabs,
            SourceOperation::ListBookmarks => &self.bookmarks,
            SourceOperation::ListHistory => &self.history,
        };
        Ok(items.clone())
    }

    async fn execute(&self, request: ExecuteRequest) -> Result<()> {
        info!(operation = %request.operation, target = ?request.target, "Execute");
        self.executed.lock().await.push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Target;

    const FIXTURE: &str = r#"
[[tabs]]
id = 11
title = "GitHub"
url = "https://github.com/"

[[tabs]]
id = 12
title = "Google Docs"
url = "https://docs.google.com/"

[[bookmarks]]
title = "Bookmarks bar"

[[bookmarks.children]]
title = "Rust"
url = "https://www.rust-lang.org/"

[[history]]
title = "Hacker News"
url = "https://news.ycombinator.com/"
"#;

    #[tokio::test]
    async fn test_fetch_each_source() {
        let gateway = FixtureGateway::from_toml_str(FIXTURE).unwrap();

        let tabs = gateway.fetch(SourceOperation::ListOpenTabs).await.unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].id, Some(ItemId::Num(11)));
        assert_eq!(tabs[1].domain.as_deref(), Some("docs.google.com"));

        let bookmarks = gateway.fetch(SourceOperation::ListBookmarks).await.unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].path.as_deref(), Some("Bookmarks bar"));

        let history = gateway.fetch(SourceOperation::ListHistory).await.unwrap();
        assert_eq!(history[0].title, "Hacker News");
    }

    #[tokio::test]
    async fn test_execute_is_recorded() {
        let gateway = FixtureGateway::from_toml_str(FIXTURE).unwrap();
        let request = ExecuteRequest {
            operation: "open-tab".to_string(),
            target: Target::Tab(ItemId::Num(11)),
        };
        gateway.execute(request.clone()).await.unwrap();
        assert_eq!(gateway.executed().await, vec![request]);
    }

    #[tokio::test]
    async fn test_demo_fixture_parses() {
        let gateway =
            FixtureGateway::from_toml_str(include_str!("../../demos/fixture.toml")).unwrap();
        let bookmarks = gateway.fetch(SourceOperation::ListBookmarks).await.unwrap();
        let ci = bookmarks.iter().find(|b| b.title == "CI dashboard").unwrap();
        assert_eq!(ci.path.as_deref(), Some("Bookmarks bar/Work"));
    }

    #[test]
    fn test_empty_fixture_is_valid() {
        let gateway = FixtureGateway::from_toml_str("").unwrap();
        assert!(gateway.tabs.is_empty());
    }

    #[test]
    fn test_invalid_fixture() {
        assert!(FixtureGateway::from_toml_str("[[tabs]]\ntitle = 3").is_err());
    }
}
