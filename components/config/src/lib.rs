#[macro_use]
extern crate serde;
extern crate tracing as log;

use std::io::ErrorKind;
use std::path::Path;

pub mod sections {
    macro_rules! section {
        (
            $(#[$meta:meta])*
            $vis:vis struct $name:ident {$(
                $(#[$field_meta:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty = $field_default:expr
                    $(=> $field_env:literal
                        $(| $func:path
                            $([  $($param:expr),* ])?
                        )?
                    )?
            ),*$(,)?}
        ) => { paste::paste! {
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            $(#[$meta])*
            #[serde(deny_unknown_fields)]
            $vis struct $name {$(
                $(#[$field_meta])*
                $(
                    #[doc = ""]
                    #[doc = "**Overridden by the `" $field_env "` environment variable.**"]
                )?
                $field_vis $field_name: $field_ty,
            )*}

            impl Default for $name {
                fn default() -> Self {
                    $name {$(
                        $field_name: $field_default,
                    )*}
                }
            }

            impl $name {
                /// Applies any environmental overrides
                pub fn apply_overrides(&mut self) {$($(
                    if let Ok(value) = std::env::var($field_env) {
                        log::debug!("Applying environment overwrite for {}.{}=>{}", stringify!($name), stringify!($field_name), $field_env);
                        self.$field_name = ($($func(&value $( $(,$param)* )? ),)? value , ).0.into();
                    }
                )?)*}
            }
        }};
    }

    pub mod encoding;
    pub mod input;
    pub mod paths;
}

pub mod util;

macro_rules! decl_config {
    ($(
        $(#[$meta:meta])*
        $field:ident: $field_ty:ty
    ),*$(,)?) => {

        /// Root Config object
        #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        #[cfg_attr(not(feature = "strict"), serde(default))]
        pub struct Config {$(
            $(#[$meta])*
            pub $field: $field_ty,
        )*}

        impl Config {
            /// Applies any environmental overrides
            pub fn apply_overrides(&mut self) {
                $(self.$field.apply_overrides();)*
            }
        }
    };
}

decl_config! {
    /// Output encoding
    encoding: sections::encoding::Encoding,
    /// Handling of input lines
    input: sections::input::Input,
    /// Filesystem paths
    paths: sections::paths::Paths,
}

enum Format {
    TOML,
    JSON,
}

fn get_format(path: &Path) -> Format {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::JSON,
        _ => Format::TOML,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("TOML Parse Error: {0}")]
    TomlDeError(#[from] toml::de::Error),
    #[error("TOML Format Error: {0}")]
    TomlSeError(#[from] toml::ser::Error),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::IOError(e) if e.kind() == ErrorKind::NotFound)
    }
}

impl Config {
    pub fn parse(file: &str, path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Ok(match get_format(path.as_ref()) {
            Format::TOML => toml::from_str(file)?,
            Format::JSON => serde_json::from_str(file)?,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let file = std::fs::read_to_string(path)?;

        Config::parse(&file, path)
    }

    /// Like [`Config::load`], but a missing file gives the default configuration
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        match Config::load(path) {
            Err(e) if e.is_not_found() => {
                log::debug!("{} not found, using default config", path.display());

                Ok(Config::default())
            }
            res => res,
        }
    }

    pub fn render(&self, path: impl AsRef<Path>) -> Result<String, ConfigError> {
        Ok(match get_format(path.as_ref()) {
            Format::TOML => toml::to_string(self)?,
            Format::JSON => serde_json::to_string_pretty(self)?,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        std::fs::write(path, self.render(path)?)?;

        Ok(())
    }
}
