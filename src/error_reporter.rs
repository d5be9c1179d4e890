use std::path::Path;

use crate::cli::VerbosityLevel;
use crate::converter::Conversion;
use crate::error::StructureWarning;

/// Writes diagnostics to stderr according to the configured verbosity.
///
/// Nothing here ever touches stdout, which carries only INI text.
pub struct ErrorReporter {
    verbosity: VerbosityLevel,
}

impl ErrorReporter {
    /// Create a new error reporter with specified verbosity
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Report a skipped `domain` or `key` element
    pub fn report_warning(&self, warning: &StructureWarning) {
        if self.verbosity >= VerbosityLevel::Normal {
            eprintln!("{}", self.format_warning(warning));
        }
    }

    pub fn report_warnings(&self, warnings: &[StructureWarning]) {
        for warning in warnings {
            self.report_warning(warning);
        }
    }

    /// Report which file is about to be read
    pub fn report_loading(&self, path: &Path) {
        if self.verbosity == VerbosityLevel::Verbose {
            eprintln!("{}", self.format_loading(path));
        }
    }

    /// Report section, key and warning counts after emission
    pub fn report_summary(&self, conversion: &Conversion) {
        if self.verbosity == VerbosityLevel::Verbose {
            eprintln!("{}", self.format_summary(conversion));
        }
    }

    pub fn format_warning(&self, warning: &StructureWarning) -> String {
        warning.to_string()
    }

    pub fn format_loading(&self, path: &Path) -> String {
        format!("Loading configuration '{}'.", path.display())
    }

    pub fn format_summary(&self, conversion: &Conversion) -> String {
        format!(
            "Converted {} section(s), {} key(s), {} warning(s)",
            conversion.sections.len(),
            conversion.key_count(),
            conversion.warnings.len()
        )
    }
}
