//! Resolver implementations and the dispatch table keyed by package manager

pub mod github_releases;
pub mod npm;
pub mod pypi;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub use github_releases::GitHubReleasesResolver;
pub use npm::NpmResolver;
pub use pypi::PypiResolver;

use crate::config::{Config, RegistriesConfig};
use crate::version::error::RegistryError;
use crate::version::fetch::{Fetcher, HttpFetcher};
use crate::version::manager::PackageManager;
use crate::version::resolver::Resolver;

/// Resolvers indexed by the package manager they serve
#[derive(Default, Clone)]
pub struct ResolverSet {
    resolvers: HashMap<PackageManager, Arc<dyn Resolver>>,
}

impl ResolverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resolver` under the package manager it reports, replacing any previous one
    pub fn register(&mut self, resolver: Arc<dyn Resolver>) {
        self.resolvers.insert(resolver.package_manager(), resolver);
    }

    pub fn with(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.register(resolver);
        self
    }

    /// Looks up the resolver for a `package-manager` input value
    pub fn get(&self, package_manager: &str) -> Result<&Arc<dyn Resolver>, RegistryError> {
        let manager: PackageManager = package_manager.parse()?;
        self.resolvers
            .get(&manager)
            .ok_or_else(|| RegistryError::UnsupportedPackageManager(package_manager.to_string()))
    }
}

/// Create the default set of resolvers for all supported package managers,
/// all sharing one fetcher
pub fn create_default_resolvers(
    fetcher: Arc<dyn Fetcher>,
    registries: &RegistriesConfig,
) -> ResolverSet {
    ResolverSet::new()
        .with(Arc::new(GitHubReleasesResolver::new(
            Arc::clone(&fetcher),
            &registries.github_releases_url(),
        )))
        .with(Arc::new(NpmResolver::new(
            Arc::clone(&fetcher),
            &registries.npm_url(),
        )))
        .with(Arc::new(PypiResolver::new(fetcher, &registries.pypi_url())))
}

/// Loads configuration (see [`Config::load`]) and builds the default
/// resolvers around an [`HttpFetcher`]
pub fn load_default_resolvers(config_path: Option<&Path>) -> Result<ResolverSet, RegistryError> {
    let config =
        Config::load(config_path).map_err(|e| RegistryError::Setup(format!("{:#}", e)))?;
    let fetcher = HttpFetcher::new(&config.fetch)?;

    Ok(create_default_resolvers(Arc::new(fetcher), &config.registries))
}
