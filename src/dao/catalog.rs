use futures::future::BoxFuture;

use crate::dao::upstream::UpstreamResult;

/// One search hit from the music catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    /// Canonical public link to the item.
    pub external_url: String,
}

/// Abstraction over the music catalog search service.
pub trait CatalogSearch: Send + Sync {
    /// Search artists by name, best match first.
    fn search_artists(&self, query: String) -> BoxFuture<'static, UpstreamResult<Vec<CatalogItem>>>;
}
