//! INI Output
//!
//! Renders converted sections as INI text. Keys and values are written verbatim:
//! `=`, brackets and embedded newlines are not escaped.

use std::io::{self, Write};

use crate::ini::Section;

/// INI formatter for converted sections
pub struct Output;

impl Output {
    /// `[name]`, one `key=value` line per entry, then a blank line.
    pub fn format_section(section: &Section) -> String {
        let mut output = format!("[{}]\n", section.name);
        for (key, value) in &section.entries {
            output.push_str(&format!("{}={}\n", key, value));
        }
        output.push('\n');
        output
    }

    pub fn format_sections(sections: &[Section]) -> String {
        sections.iter().map(Self::format_section).collect()
    }

    pub fn write_sections<W: Write>(writer: &mut W, sections: &[Section]) -> io::Result<()> {
        for section in sections {
            writer.write_all(Self::format_section(section).as_bytes())?;
        }
        writer.flush()
    }
}
