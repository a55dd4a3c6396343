use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use latest_version::action::io::{PACKAGE_MANAGER, PACKAGE_NAME};
use latest_version::action::{self, WorkflowIo};
use latest_version::log::{self, LogFormat};
use latest_version::version::error::RegistryError;
use latest_version::version::resolvers::load_default_resolvers;

#[derive(Parser)]
#[command(name = "latest-version")]
#[command(version, about = "Resolve the latest published version of a package")]
struct Cli {
    /// Registry to query: github-releases, npm or pypi
    #[arg(long, env = "INPUT_PACKAGE-MANAGER", default_value = "")]
    package_manager: String,

    /// Package identifier (owner/repo, @scope/name, distribution name)
    #[arg(long, env = "INPUT_PACKAGE-NAME", default_value = "")]
    package_name: String,

    /// File outputs are appended to (set by the Actions runner)
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,

    /// JSON config file (defaults to $XDG_CONFIG_HOME/latest-version/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = log::init(cli.log_format)
        .inspect_err(|e| eprintln!("Failed to initialize logging: {:#}", e))
        .ok();

    let inputs = HashMap::from([
        (PACKAGE_MANAGER.to_string(), cli.package_manager),
        (PACKAGE_NAME.to_string(), cli.package_name),
    ]);
    let mut io = WorkflowIo::new(inputs, cli.output_file);
    let config_path = cli.config;

    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(action::run_with_setup(&mut io, || {
            load_default_resolvers(config_path.as_deref())
        })),
        Err(e) => action::fail(
            &mut io,
            RegistryError::Setup(format!("Failed to start async runtime: {}", e)),
        ),
    };

    let failed = io.finish().context("Failed to write outputs")?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
