use std::path::PathBuf;

use fixed_radix::Format;

/// Render MD5 digests as fixed-width base 10, 36 or 62 identifiers
#[derive(Debug, argh::FromArgs)]
pub struct CliOptions {
    /// print version information and exit
    #[argh(switch, short = 'V')]
    pub version: bool,

    /// logging level (0 = Warn, 1 = Info, 2 = Debug, 3 = Trace) [env RADIX_VERBOSE]
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,

    /// path to config file
    #[argh(option, short = 'c', default = "PathBuf::from(\"radix.toml\")")]
    pub config_path: PathBuf,

    /// write the effective configuration to the config path and exit
    #[argh(switch)]
    pub write_config: bool,

    /// output format: 10, 36, 62 or 62:swapped-case [env RADIX_FORMAT]
    #[argh(option, short = 'f')]
    pub format: Option<Format>,

    /// print every supported format for each input
    #[argh(switch, short = 'a')]
    pub all: bool,

    /// treat inputs as hexidecimal digests instead of hashing them
    #[argh(switch)]
    pub hex: bool,

    /// decode identifiers in the selected format back to hexidecimal digests
    #[argh(switch, short = 'd')]
    pub decode: bool,

    /// inputs to process, read line-by-line from stdin if none are given
    #[argh(positional)]
    pub inputs: Vec<String>,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut args: CliOptions = argh::from_env();

        if args.version {
            println!("radix {} ({})", crate::built::PKG_VERSION, crate::built::BUILT_TIME_UTC);
            std::process::exit(0);
        }

        if args.verbose.is_none() {
            if let Ok(verbose) = std::env::var("RADIX_VERBOSE") {
                args.verbose = verbose.parse().ok();
            }
        }

        if args.decode && args.all {
            anyhow::bail!("`--decode` cannot be combined with `--all`");
        }

        Ok(args)
    }
}
