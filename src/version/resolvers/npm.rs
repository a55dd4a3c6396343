//! npm registry resolver

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::fetch::Fetcher;
use crate::version::manager::PackageManager;
use crate::version::resolver::Resolver;

const ACCEPT: &str = "application/json";

/// Subset of the npm package metadata document
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

/// Resolves the version tagged `latest` on the npm registry
pub struct NpmResolver {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl NpmResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

/// Returns `dist-tags.latest` from an npm package metadata body
pub fn latest_dist_tag(body: &str, package_name: &str) -> Result<String, RegistryError> {
    let package_info: NpmPackageResponse = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse npm registry response: {}", e);
        RegistryError::InvalidResponse(e.to_string())
    })?;

    package_info
        .dist_tags
        .get("latest")
        .cloned()
        .ok_or_else(|| RegistryError::MissingLatestTag(package_name.to_string()))
}

#[async_trait::async_trait]
impl Resolver for NpmResolver {
    fn package_manager(&self) -> PackageManager {
        PackageManager::Npm
    }

    async fn resolve_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/{}", self.base_url, Self::encode_package_name(package_name));
        let body = self.fetcher.get_url(&url, ACCEPT).await?;
        latest_dist_tag(&body, package_name)
    }
}
