use std::path::PathBuf;

use thiserror::Error;

/// Fatal conversion failures. Any of these aborts the run before output is written.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Could not read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse configuration file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Could not parse configuration file '{path}': content is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("Root element '{found}' must be 'museekd'")]
    Schema { found: String },

    #[error("Home directory could not be determined; pass the config.xml path explicitly")]
    HomeDirUnavailable,
}

/// Structural problems in a single `domain` or `key` element.
///
/// The offending element is skipped and conversion continues; the `Display`
/// text is the line written to the diagnostic stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureWarning {
    #[error("'domain' element expected but '{found}' found")]
    UnexpectedDomainTag { found: String },

    #[error("'domain' element doesn't have 'id' attribute")]
    MissingDomainId,

    #[error("'key' element expected but '{found}' found in '{domain}'")]
    UnexpectedKeyTag { found: String, domain: String },

    #[error("'key' element doesn't have 'id' attribute in '{domain}'")]
    MissingKeyId { domain: String },
}

/// Problems found while reading INI text back. Lines are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IniWarning {
    #[error("Line {line} without domain: {text}")]
    WithoutDomain { line: usize, text: String },

    #[error("Line {line} doesn't have '=': {text}")]
    MissingSeparator { line: usize, text: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;
