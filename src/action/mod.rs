//! Invocation harness: reads the named inputs, runs the resolver and
//! reports outputs or a failure
//!
//! - [`io`]: The `ActionIo` trait the orchestrator talks to
//! - [`workflow`]: GitHub Actions implementation (`$GITHUB_OUTPUT`, workflow commands)
//! - [`run`]: The orchestrator

pub mod io;
pub mod run;
pub mod workflow;

pub use io::ActionIo;
pub use run::{Outcome, fail, run, run_with_setup};
pub use workflow::WorkflowIo;
