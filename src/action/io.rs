//! Input/output boundary of an invocation

use crate::version::error::RegistryError;

/// Input `package-manager`, echoed back as an output of the same name
pub const PACKAGE_MANAGER: &str = "package-manager";
/// Input `package-name`, echoed back as an output of the same name
pub const PACKAGE_NAME: &str = "package-name";
/// Output holding the resolved version
pub const VERSION: &str = "version";

/// Host environment seen by the orchestrator
pub trait ActionIo {
    /// Returns the value of a named input, empty when unset
    fn get_input(&self, name: &str) -> String;

    /// Reports a named output
    fn set_output(&mut self, name: &str, value: &str);

    /// Signals that the invocation failed with `error`
    fn set_failed(&mut self, error: &RegistryError);
}
