//! PyPI resolver reading the per-project RSS release feed

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::fetch::Fetcher;
use crate::version::manager::PackageManager;
use crate::version::resolver::Resolver;

const ACCEPT: &str = "application/rss+xml";

/// `<rss>` document root
#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

/// `<channel>`; only the items matter, the channel's own title/link/description are skipped
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    title: Option<String>,
}

/// Resolves the newest release listed in a project's PyPI RSS feed
pub struct PypiResolver {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl PypiResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.to_string(),
        }
    }

    fn feed_url(&self, package_name: &str) -> String {
        format!("{}/rss/project/{}/releases.xml", self.base_url, package_name)
    }
}

/// Returns the title of the first `<item>` of an RSS feed, or `None` when
/// the feed has no items. PyPI orders the feed newest first.
pub fn latest_item_title(xml: &str) -> Result<Option<String>, RegistryError> {
    let rss: Rss = quick_xml::de::from_str(xml).map_err(|e| {
        warn!("Failed to parse PyPI RSS feed: {}", e);
        RegistryError::InvalidResponse(e.to_string())
    })?;

    Ok(rss.channel.items.into_iter().next().and_then(|item| item.title))
}

/// Extracts the version from a feed item title.
///
/// PyPI titles are the bare version (`1.0.20`); titles carrying a prefix
/// such as the project name (`lumigo_opentelemetry 1.0.20`) yield their
/// last whitespace-separated token.
pub fn version_from_title(title: &str) -> Option<&str> {
    title.split_whitespace().last()
}

#[async_trait::async_trait]
impl Resolver for PypiResolver {
    fn package_manager(&self) -> PackageManager {
        PackageManager::PyPI
    }

    async fn resolve_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let body = self
            .fetcher
            .get_url(&self.feed_url(package_name), ACCEPT)
            .await?;

        let title = latest_item_title(&body)?
            .ok_or_else(|| RegistryError::EmptyFeed(package_name.to_string()))?;
        debug!("Latest PyPI feed item for {}: {:?}", package_name, title);

        version_from_title(&title)
            .map(str::to_string)
            .ok_or_else(|| RegistryError::EmptyFeed(package_name.to_string()))
    }
}
