//! GitHub Releases API resolver

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::fetch::Fetcher;
use crate::version::manager::PackageManager;
use crate::version::resolver::Resolver;

/// Media type of the GitHub REST API
const ACCEPT: &str = "application/vnd.github+json";

/// Entry of the GitHub "list releases" response
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Resolves the newest release tag of a GitHub repository
pub struct GitHubReleasesResolver {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl GitHubReleasesResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.to_string(),
        }
    }

    fn releases_url(&self, repository: &str) -> String {
        format!("{}/repos/{}/releases", self.base_url, repository)
    }
}

/// Returns the tag of the first release in a "list releases" body.
/// GitHub lists releases newest first, so no sorting happens here.
pub fn latest_release_tag(body: &str, repository: &str) -> Result<String, RegistryError> {
    let releases: Vec<Release> = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse GitHub releases response: {}", e);
        RegistryError::InvalidResponse(e.to_string())
    })?;

    releases
        .into_iter()
        .next()
        .map(|release| release.tag_name)
        .ok_or_else(|| RegistryError::NoReleases(repository.to_string()))
}

#[async_trait::async_trait]
impl Resolver for GitHubReleasesResolver {
    fn package_manager(&self) -> PackageManager {
        PackageManager::GitHubReleases
    }

    async fn resolve_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let body = self.fetcher.get_url(&self.releases_url(package_name), ACCEPT).await?;
        latest_release_tag(&body, package_name)
    }
}
