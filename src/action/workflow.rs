//! GitHub Actions host: outputs go to the `$GITHUB_OUTPUT` file, failures
//! become `::error::` workflow commands

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::error;

use crate::action::io::ActionIo;
use crate::version::error::RegistryError;

const DELIMITER: &str = "ghadelimiter_latest_version";

/// [`ActionIo`] for a GitHub Actions runner
pub struct WorkflowIo {
    inputs: HashMap<String, String>,
    output_file: Option<PathBuf>,
    commands: Box<dyn Write + Send>,
    failed: bool,
    write_error: Option<io::Error>,
}

impl WorkflowIo {
    /// `output_file` is the runner's `$GITHUB_OUTPUT`; without one, outputs
    /// are printed on stdout
    pub fn new(inputs: HashMap<String, String>, output_file: Option<PathBuf>) -> Self {
        Self {
            inputs,
            output_file,
            commands: Box::new(io::stdout()),
            failed: false,
            write_error: None,
        }
    }

    /// Sends workflow commands (and file-less outputs) to `writer` instead of stdout
    pub fn with_commands(mut self, writer: impl Write + Send + 'static) -> Self {
        self.commands = Box::new(writer);
        self
    }

    /// Consumes the host, surfacing the first error hit while writing outputs
    pub fn finish(self) -> io::Result<bool> {
        match self.write_error {
            Some(e) => Err(e),
            None => Ok(self.failed),
        }
    }

    fn write_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        let entry = format_output(name, value);
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())
            }
            None => {
                self.commands.write_all(entry.as_bytes())?;
                self.commands.flush()
            }
        }
    }
}

impl ActionIo for WorkflowIo {
    fn get_input(&self, name: &str) -> String {
        self.inputs
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn set_output(&mut self, name: &str, value: &str) {
        if let Err(e) = self.write_output(name, value) {
            error!("Failed to write output {}: {}", name, e);
            self.write_error.get_or_insert(e);
        }
    }

    fn set_failed(&mut self, error: &RegistryError) {
        self.failed = true;
        let command = format!("::error::{}\n", escape_data(&error.to_string()));
        if let Err(e) = self
            .commands
            .write_all(command.as_bytes())
            .and_then(|_| self.commands.flush())
        {
            error!("Failed to write error command: {}", e);
            self.write_error.get_or_insert(e);
        }
    }
}

/// Formats one `$GITHUB_OUTPUT` entry, using the heredoc form for multi-line values
fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = DELIMITER.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

/// Escapes a workflow command message
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
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

    fn inputs(package_manager: &str, package_name: &str) -> HashMap<String, String> {
        HashMap::from([
            ("package-manager".to_string(), package_manager.to_string()),
            ("package-name".to_string(), package_name.to_string()),
        ])
    }

    #[test]
    fn get_input_trims_and_defaults_to_empty() {
        let io = WorkflowIo::new(inputs(" npm\n", "lodash"), None);

        assert_eq!(io.get_input("package-manager"), "npm");
        assert_eq!(io.get_input("package-name"), "lodash");
        assert_eq!(io.get_input("token"), "");
    }

    #[test]
    fn set_output_appends_to_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "previous=step\n").unwrap();

        let mut io = WorkflowIo::new(inputs("npm", "lodash"), Some(path.clone()));
        io.set_output("package-manager", "npm");
        io.set_output("version", "4.17.21");

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "previous=step\npackage-manager=npm\nversion=4.17.21\n"
        );
        assert!(!io.finish().unwrap());
    }

    #[test]
    fn set_output_prints_to_stdout_without_output_file() {
        let buffer = SharedBuffer::default();
        let mut io = WorkflowIo::new(inputs("pypi", "requests"), None).with_commands(buffer.clone());

        io.set_output("version", "2.32.5");

        assert_eq!(buffer.contents(), "version=2.32.5\n");
    }

    #[test]
    fn set_failed_emits_escaped_error_command() {
        let buffer = SharedBuffer::default();
        let mut io = WorkflowIo::new(inputs("npm", "x"), None).with_commands(buffer.clone());

        io.set_failed(&RegistryError::InvalidResponse("100% broken\nbody".to_string()));

        assert_eq!(
            buffer.contents(),
            "::error::Invalid response: 100%25 broken%0Abody\n"
        );
        assert!(io.finish().unwrap());
    }

    #[test]
    fn finish_reports_output_write_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let mut io = WorkflowIo::new(inputs("npm", "x"), Some(dir.path().to_path_buf()));

        io.set_output("version", "1.0.0");

        assert!(io.finish().is_err());
    }

    #[test]
    fn format_output_uses_heredoc_for_multiline_values() {
        assert_eq!(format_output("version", "1.0.0"), "version=1.0.0\n");
        assert_eq!(
            format_output("notes", "a\nb"),
            "notes<<ghadelimiter_latest_version\na\nb\nghadelimiter_latest_version\n"
        );
        assert_eq!(
            format_output("notes", "x\nghadelimiter_latest_version"),
            "notes<<ghadelimiter_latest_version_\nx\nghadelimiter_latest_version\nghadelimiter_latest_version_\n"
        );
    }
}
