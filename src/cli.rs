use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{Config, HomeDirProvider};
use crate::error::Result;

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only fatal errors
    Quiet,
    /// Structural warnings
    #[default]
    Normal,
    /// Warnings plus progress and a conversion summary
    Verbose,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Convert(Config),
    /// Too many positional arguments: print usage and exit with status 1.
    Usage { program: String },
}

/// Convert museekd config.xml file to ini format
#[derive(Parser, Debug, Clone)]
#[command(name = "muxml2ini")]
#[command(about = "Convert museekd config.xml file to ini format")]
#[command(version)]
pub struct Cli {
    /// Path to config.xml (defaults to ~/.museekd/config.xml)
    ///
    /// Unknown `-`/`--` words are taken as paths, so `-old.xml` is a file name.
    #[arg(value_name = "CONFIG_XML", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", help = "Report progress and a summary on stderr")]
    pub verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress structural warnings",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Decide what to run. Reads the home directory only when no path was given.
    pub fn invocation(&self, program: &str, home: &impl HomeDirProvider) -> Result<Invocation> {
        if self.paths.len() > 1 {
            return Ok(Invocation::Usage {
                program: program.to_string(),
            });
        }
        Ok(Invocation::Convert(Config::from_cli(self, home)?))
    }
}

/// Base name of the invoked command, falling back to the crate name.
pub fn program_name(argv0: Option<&Path>) -> String {
    argv0
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Two-line usage text printed on a usage error.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} [config.xml]\nConvert museekd config.xml file to ini format\n",
        program
    )
}
