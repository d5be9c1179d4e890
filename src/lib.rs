//! # muxml2ini Library
//!
//! Converts a museekd `config.xml` export into the INI format the daemon reads:
//! every `domain` element becomes a `[section]` and every `key` element a
//! `key=value` line. Malformed domains and keys are skipped with a warning;
//! a wrong root element aborts the conversion.

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod error_reporter;
pub mod ini;
pub mod output;

pub use cli::{Cli, Invocation, VerbosityLevel, program_name, usage};
pub use config::{Config, HomeDirProvider, SystemHomeDir, default_config_path};
pub use converter::{Conversion, convert, convert_document};
pub use error::{ConvertError, IniWarning, Result, StructureWarning};
pub use error_reporter::ErrorReporter;
pub use ini::{IniDocument, IniReader, Section};
pub use output::Output;
