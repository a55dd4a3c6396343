//! Package manager selector

use std::fmt;

use crate::version::error::RegistryError;

/// Registry a package is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// GitHub Releases (owner/repo)
    GitHubReleases,
    /// npm registry (name or @scope/name)
    Npm,
    /// Python Package Index (distribution name)
    PyPI,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [
        PackageManager::GitHubReleases,
        PackageManager::Npm,
        PackageManager::PyPI,
    ];

    /// Returns the name used for the `package-manager` input
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::GitHubReleases => "github-releases",
            PackageManager::Npm => "npm",
            PackageManager::PyPI => "pypi",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github-releases" => Ok(PackageManager::GitHubReleases),
            "npm" => Ok(PackageManager::Npm),
            "pypi" => Ok(PackageManager::PyPI),
            other => Err(RegistryError::UnsupportedPackageManager(other.to_string())),
        }
    }
}
