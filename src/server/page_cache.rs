//! Rendered-view cache that mutation handlers invalidate by path

use crate::core::revalidate::PathRevalidator;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A cached view body
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPage {
    pub body: Value,
    pub rendered_at: DateTime<Utc>,
}

/// Path → rendered body, recomputed on the first request after a revalidation
///
/// A render that started before a revalidation of the same cache is served
/// but not stored, so a stale body never outlives the revalidation.
#[derive(Clone, Default)]
pub struct PageCache {
    pages: Arc<RwLock<HashMap<String, CachedPage>>>,
    generation: Arc<AtomicU64>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, path: &str) -> Option<CachedPage> {
        self.pages.read().await.get(path).cloned()
    }

    pub async fn is_cached(&self, path: &str) -> bool {
        self.pages.read().await.contains_key(path)
    }

    /// Serve `path` from the cache, rendering and storing it on a miss
    pub async fn get_or_render<F, Fut, E>(&self, path: &str, render: F) -> Result<CachedPage, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(page) = self.get(path).await {
            return Ok(page);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let page = CachedPage {
            body: render().await?,
            rendered_at: Utc::now(),
        };

        let mut pages = self.pages.write().await;
        if self.generation.load(Ordering::Acquire) == generation {
            pages.insert(path.to_string(), page.clone());
        } else {
            tracing::debug!(path, "discarding render that raced a revalidation");
        }

        Ok(page)
    }
}

#[async_trait]
impl PathRevalidator for PageCache {
    async fn revalidate(&self, path: &str) {
        let mut pages = self.pages.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        let evicted = pages.remove(path).is_some();
        tracing::debug!(path, evicted, "page revalidated");
    }
}
