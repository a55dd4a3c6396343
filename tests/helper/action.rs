//! Action host test utilities

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use latest_version::action::ActionIo;
use latest_version::version::error::RegistryError;

/// What `set_failed` received
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub message: String,
    pub not_found_url: Option<String>,
    pub unsupported: bool,
}

/// [`ActionIo`] that records every call
#[derive(Default)]
pub struct RecordingIo {
    inputs: HashMap<String, String>,
    pub outputs: Vec<(String, String)>,
    pub failures: Vec<Failure>,
}

impl RecordingIo {
    pub fn new(package_manager: &str, package_name: &str) -> Self {
        Self {
            inputs: HashMap::from([
                ("package-manager".to_string(), package_manager.to_string()),
                ("package-name".to_string(), package_name.to_string()),
            ]),
            ..Self::default()
        }
    }

    /// Values reported for `name`, in order
    pub fn output(&self, name: &str) -> Vec<&str> {
        self.outputs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl ActionIo for RecordingIo {
    fn get_input(&self, name: &str) -> String {
        self.inputs.get(name).cloned().unwrap_or_default()
    }

    fn set_output(&mut self, name: &str, value: &str) {
        self.outputs.push((name.to_string(), value.to_string()));
    }

    fn set_failed(&mut self, error: &RegistryError) {
        self.failures.push(Failure {
            message: error.to_string(),
            not_found_url: match error {
                RegistryError::NotFound(url) => Some(url.clone()),
                _ => None,
            },
            unsupported: matches!(error, RegistryError::UnsupportedPackageManager(_)),
        });
    }
}

/// Cloneable in-memory writer for capturing workflow commands
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
