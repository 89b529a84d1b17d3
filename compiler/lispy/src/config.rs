//! Command-line configuration.

use std::path::PathBuf;

use lispy_eval::NumberFormat;
use thiserror::Error;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
    Version,
}

/// Settings for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub format: NumberFormat,
    /// Files to run in order. Empty means start the REPL.
    pub files: Vec<PathBuf>,
}

impl Config {
    pub fn is_interactive(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("invalid number format '{0}' (expected 'integer' or 'fixed')")]
    InvalidFormat(String),

    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--format=") {
            config.format = parse_format(value)?;
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--format" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--format"))?;
                config.format = parse_format(&value)?;
            }
            _ if arg.starts_with('-') => return Err(ConfigError::UnknownFlag(arg)),
            _ => config.files.push(PathBuf::from(arg)),
        }
    }

    Ok(Command::Run(config))
}

fn parse_format(value: &str) -> Result<NumberFormat, ConfigError> {
    NumberFormat::parse(value).ok_or_else(|| ConfigError::InvalidFormat(value.to_string()))
}

pub fn usage() -> String {
    format!(
        "Lispy {version}

Usage: lispy [options] [FILE...]

With no files, starts an interactive session.

Options:
  --format=<fmt>   Number display: integer (default) or fixed
  -h, --help       Show this help
  -V, --version    Show version",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests;
