//! Registry test utilities

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use latest_version::version::error::RegistryError;
use latest_version::version::fetch::Fetcher;

/// Reads a file from `tests/fixtures`
pub fn fixture(path: &str) -> String {
    let full = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path);
    std::fs::read_to_string(&full).unwrap_or_else(|e| panic!("fixture {:?}: {}", full, e))
}

enum Response {
    Body(String),
    NotFound,
}

/// Fetcher answering every URL with the same canned response, recording the URLs asked for
pub struct CannedFetcher {
    response: Response,
    requests: Mutex<Vec<String>>,
}

impl CannedFetcher {
    /// Answers every request with `body`
    pub fn with_body(body: String) -> Self {
        Self {
            response: Response::Body(body),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with the body of a fixture file
    pub fn with_fixture(path: &str) -> Self {
        Self::with_body(fixture(path))
    }

    /// Fails every request with `RegistryError::NotFound`
    pub fn not_found() -> Self {
        Self {
            response: Response::NotFound,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for CannedFetcher {
    async fn get_url(&self, url: &str, _accept: &str) -> Result<String, RegistryError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.response {
            Response::Body(body) => Ok(body.clone()),
            Response::NotFound => Err(RegistryError::NotFound(url.to_string())),
        }
    }
}
