use std::path::{Path, PathBuf};

use crate::cli::{Cli, VerbosityLevel};
use crate::error::{ConvertError, Result};

/// Directory under the home directory holding the daemon configuration
pub const CONFIG_DIR_NAME: &str = ".museekd";
/// File name of the XML configuration export
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Trait for abstracting home directory lookup
pub trait HomeDirProvider {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory of the invoking user, for production use
pub struct SystemHomeDir;

impl HomeDirProvider for SystemHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Run configuration derived from the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub verbosity: VerbosityLevel,
}

impl Config {
    /// Use the single positional path verbatim, or fall back to `~/.museekd/config.xml`.
    pub fn from_cli(cli: &Cli, home: &impl HomeDirProvider) -> Result<Self> {
        let input = match cli.paths.first() {
            Some(path) => path.clone(),
            None => default_config_path(home)?,
        };

        Ok(Self {
            input,
            verbosity: cli.verbosity(),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

/// `<home>/.museekd/config.xml`
pub fn default_config_path(home: &impl HomeDirProvider) -> Result<PathBuf> {
    home.home_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConvertError::HomeDirUnavailable)
}
