//! Application startup: resolve the build information once and print it

use super::cli::args::Args;
use super::cli::config::load_config;
use super::cli::display::render;
use super::error::{StartupError, StartupResult};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::core::version::{self, BuildInfo};
use clap::Parser;
use std::io::Write;

/// Entry point for the binary. Exits with status 1 on failure.
pub fn startup() {
    let args = Args::parse();

    // The config file is merged before the logger starts so its logging keys
    // apply. If it cannot be read, log with the command-line settings and report.
    let prepared = prepare(args.clone());
    let settings = match &prepared {
        Ok((merged, _)) => merged.log_settings(),
        Err(_) => args.log_settings(),
    };
    if let Err(e) = init_logging(&settings) {
        let error = StartupError::Logging {
            message: e.to_string(),
        };
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let result = prepared.and_then(|(args, info)| run(&args, info, &mut stdout.lock()));
    if let Err(e) = result {
        log_error_with_context(&e, "Unable to report build information");
        std::process::exit(1);
    }
}

/// Merge the config file into the arguments and compute the build information
pub fn prepare(mut args: Args) -> StartupResult<(Args, BuildInfo)> {
    let config = load_config(args.config_file.as_deref(), &Args::command_name())?;
    let info = resolve(&mut args, config.as_ref())?;
    Ok((args, info))
}

/// Install the build information and write it out. Expects logging to be running.
pub fn run(args: &Args, info: BuildInfo, out: &mut dyn Write) -> StartupResult<()> {
    log::info!(
        "Build information: version={:?} revision={:?} build_date={:?}",
        info.version(),
        info.revision(),
        info.build_date()
    );

    version::install(info)?;
    let line = render_current(args, &SystemTimeProvider)?;
    log::debug!("Rendered build information: {}", line);

    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

/// Apply an optional config table to the arguments and compute the build information
pub fn resolve(args: &mut Args, config: Option<&toml::Table>) -> StartupResult<BuildInfo> {
    if let Some(config) = config {
        args.apply_toml_values(config)?;
    }
    Ok(args.resolve_build_info(BuildInfo::from_build()))
}

fn render_current(args: &Args, clock: &dyn TimeProvider) -> StartupResult<String> {
    Ok(render(
        version::current(),
        &args.display_name(),
        args.output_format(),
        clock,
    )?)
}
