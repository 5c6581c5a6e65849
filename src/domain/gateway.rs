use crate::domain::models::{ActionItem, ExecuteRequest, SourceOperation};
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSourceGateway: Send + Sync {
    // Raw candidate list for a source, in the order the browser reports it
    async fn fetch(&self, source: SourceOperation) -> Result<Vec<ActionItem>>;

    // Performs the browser side effect; callers never await the outcome
    async fn execute(&self, request: ExecuteRequest) -> Result<()>;
}
