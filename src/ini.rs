//! INI data model and reader
//!
//! [`Section`] is what the converter produces. [`IniReader`] parses INI text the
//! same way the museekd daemon loads its configuration, so converted output can
//! be checked against what the daemon will actually see.

use crate::error::IniWarning;

/// One `[name]` block with its `key=value` pairs in document order.
///
/// Keys are not required to be unique; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of reading INI text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniDocument {
    pub sections: Vec<Section>,
    pub warnings: Vec<IniWarning>,
}

impl IniDocument {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// Line-oriented INI reader matching the daemon's loader.
pub struct IniReader;

/// C `isspace` in the "C" locale: ASCII whitespace plus vertical tab. NBSP is not space.
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

impl IniReader {
    pub fn parse(text: &str) -> IniDocument {
        let mut document = IniDocument::default();
        let mut current: Option<Section> = None;

        for (index, raw) in text.lines().enumerate() {
            let number = index + 1;
            let line = raw.trim_start_matches(is_c_space);
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let line = line.trim_end_matches(is_c_space);

            if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
                if let Some(section) = current.take() {
                    document.sections.push(section);
                }
                current = Some(Section::new(&line[1..line.len() - 1]));
                continue;
            }

            let section_known = current.as_ref().is_some_and(|s| !s.name.is_empty());
            if !section_known {
                document.warnings.push(IniWarning::WithoutDomain {
                    line: number,
                    text: line.to_string(),
                });
            }

            let Some((key, value)) = line.split_once('=') else {
                document.warnings.push(IniWarning::MissingSeparator {
                    line: number,
                    text: line.to_string(),
                });
                continue;
            };

            current
                .get_or_insert_with(Section::default)
                .push(
                    key.trim_end_matches(is_c_space),
                    value.trim_start_matches(is_c_space),
                );
        }

        if let Some(section) = current {
            document.sections.push(section);
        }
        document
    }
}
