//! Resolver trait for looking up the latest version in a registry

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::manager::PackageManager;

/// Trait for resolving the latest published version of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Resolver: Send + Sync {
    /// Returns the package manager this implementation handles
    fn package_manager(&self) -> PackageManager;

    /// Resolves the latest published version of a package
    ///
    /// # Arguments
    /// * `package_name` - Registry-specific identifier (e.g., "actions/checkout" for GitHub Releases)
    ///
    /// # Returns
    /// * `Ok(String)` - The version exactly as the registry publishes it
    /// * `Err(RegistryError)` - If the fetch fails or the response has no version
    async fn resolve_latest_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
