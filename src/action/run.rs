//! Orchestrator: one lookup per invocation

use std::borrow::Borrow;

use tracing::{info, warn};

use crate::action::io::{ActionIo, PACKAGE_MANAGER, PACKAGE_NAME, VERSION};
use crate::version::error::RegistryError;
use crate::version::resolvers::ResolverSet;

/// Result of one invocation
#[derive(Debug)]
pub enum Outcome {
    Resolved {
        package_manager: String,
        package_name: String,
        version: String,
    },
    Failed(RegistryError),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Reads the inputs, echoes them, resolves the latest version and reports it.
///
/// Errors never escape: they are handed to [`ActionIo::set_failed`] and
/// returned inside [`Outcome::Failed`].
pub async fn run<I: ActionIo + ?Sized>(io: &mut I, resolvers: &ResolverSet) -> Outcome {
    run_with_setup(io, || Ok::<_, RegistryError>(resolvers)).await
}

/// Like [`run`], but builds the resolvers only after both inputs are echoed,
/// so a failing `setup` is reported through the failure channel too
pub async fn run_with_setup<I, F, R>(io: &mut I, setup: F) -> Outcome
where
    I: ActionIo + ?Sized,
    F: FnOnce() -> Result<R, RegistryError>,
    R: Borrow<ResolverSet>,
{
    let (package_manager, package_name) = echo_inputs(io);

    let result = match setup() {
        Ok(resolvers) => resolve(resolvers.borrow(), &package_manager, &package_name).await,
        Err(e) => Err(e),
    };

    report(io, package_manager, package_name, result)
}

/// Echoes the inputs and signals `error` without attempting a lookup
pub fn fail<I: ActionIo + ?Sized>(io: &mut I, error: RegistryError) -> Outcome {
    let (package_manager, package_name) = echo_inputs(io);
    report(io, package_manager, package_name, Err(error))
}

fn echo_inputs<I: ActionIo + ?Sized>(io: &mut I) -> (String, String) {
    let package_manager = io.get_input(PACKAGE_MANAGER);
    let package_name = io.get_input(PACKAGE_NAME);

    io.set_output(PACKAGE_MANAGER, &package_manager);
    io.set_output(PACKAGE_NAME, &package_name);

    (package_manager, package_name)
}

async fn resolve(
    resolvers: &ResolverSet,
    package_manager: &str,
    package_name: &str,
) -> Result<String, RegistryError> {
    resolvers
        .get(package_manager)?
        .resolve_latest_version(package_name)
        .await
}

fn report<I: ActionIo + ?Sized>(
    io: &mut I,
    package_manager: String,
    package_name: String,
    result: Result<String, RegistryError>,
) -> Outcome {
    match result {
        Ok(version) => {
            info!(
                "Latest version of {} ({}) is {}",
                package_name, package_manager, version
            );
            io.set_output(VERSION, &version);
            Outcome::Resolved {
                package_manager,
                package_name,
                version,
            }
        }
        Err(error) => {
            warn!(
                "Failed to resolve {} ({}): {}",
                package_name, package_manager, error
            );
            io.set_failed(&error);
            Outcome::Failed(error)
        }
    }
}
