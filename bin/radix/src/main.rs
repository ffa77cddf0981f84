extern crate tracing as log;

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use cli::CliOptions;
use config::Config;

pub mod built {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub mod cli;
pub mod logging;
pub mod process;

fn load_config(args: &CliOptions) -> anyhow::Result<Config> {
    log::info!("Loading config from: {}", args.config_path.display());
    let mut config = Config::load_or_default(&args.config_path)?;

    log::info!("Applying environment overrides to configuration");
    config.apply_overrides();

    // command-line flags take precedence over both
    if let Some(format) = args.format {
        config.encoding.format = format;
    }

    config.encoding.all |= args.all;
    config.input.hex |= args.hex;

    Ok(config)
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let args = CliOptions::parse()?;

    // temporary logger until the log directory is known
    let (dispatch, _) = logging::generate(args.verbose, None)?;
    let log_guard = log::dispatcher::set_default(&dispatch);

    log::debug!("Arguments: {:?}", args);

    let config = load_config(&args)?;

    if args.write_config {
        log::info!("Saving config to: {}", args.config_path.display());
        config.save(&args.config_path)?;

        return Ok(ExitCode::SUCCESS);
    }

    drop(log_guard);

    let (dispatch, _log_guard) = logging::generate(args.verbose, config.paths.log_dir.clone())?;
    log::dispatcher::set_global_default(dispatch)?;

    let job = process::Job::new(&config, args.decode);

    log::debug!("Running {job:?}");

    let mut out = BufWriter::new(std::io::stdout().lock());

    let failed = match args.inputs.is_empty() {
        true => job.run_reader(std::io::stdin().lock(), &mut out)?,
        false => job.run(&args.inputs, &mut out)?,
    };

    out.flush()?;

    if failed > 0 {
        log::warn!("{failed} input(s) could not be processed");

        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
