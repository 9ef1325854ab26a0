//! Page cache invalidation

use async_trait::async_trait;

/// Marks a rendered view as stale so it is recomputed on its next request
#[async_trait]
pub trait PathRevalidator: Send + Sync {
    async fn revalidate(&self, path: &str);
}
