//! museekd config.xml to INI conversion
//!
//! The input is a two-level tree: a `museekd` root holding `domain` elements,
//! each holding `key` elements whose text is the value. A wrong root tag is
//! fatal. Anything malformed below the root is skipped with a
//! [`StructureWarning`] and the walk carries on with the next sibling.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{ConvertError, Result, StructureWarning};
use crate::ini::Section;

pub const ROOT_TAG: &str = "museekd";
pub const DOMAIN_TAG: &str = "domain";
pub const KEY_TAG: &str = "key";
pub const ID_ATTRIBUTE: &str = "id";

/// Sections in document order plus every warning raised while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversion {
    pub sections: Vec<Section>,
    pub warnings: Vec<StructureWarning>,
}

impl Conversion {
    pub fn key_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}

/// Read and convert the config.xml at `path`.
pub fn convert(path: &Path) -> Result<Conversion> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = decode(&bytes).map_err(|encoding| ConvertError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;

    let document = parse(&source).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    convert_document(&document)
}

/// Convert an already parsed document.
pub fn convert_document(document: &Document<'_>) -> Result<Conversion> {
    let root = document.root_element();
    let root_tag = tag_of(root);
    if root_tag != ROOT_TAG {
        return Err(ConvertError::Schema {
            found: root_tag.into_owned(),
        });
    }

    let mut conversion = Conversion::default();
    for child in root.children().filter(|n| n.is_element()) {
        if let Some(section) = read_domain(child, &mut conversion.warnings) {
            conversion.sections.push(section);
        }
    }
    Ok(conversion)
}

/// Parse XML text with DTDs permitted, as config exports may carry a doctype.
pub fn parse(source: &str) -> std::result::Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(source, options)
}

/// Decode file bytes using the BOM, else the XML declaration's `encoding`, else UTF-8.
///
/// On malformed input the encoding that was tried is returned.
pub fn decode(bytes: &[u8]) -> std::result::Result<Cow<'_, str>, &'static Encoding> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (declared_encoding(bytes).unwrap_or(UTF_8), bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(encoding)
}

fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let declaration = bytes.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = &declaration[..end];

    let name_end = declaration.windows(8).position(|w| w == b"encoding")? + 8;
    let value = declaration[name_end..].trim_ascii_start().strip_prefix(b"=")?;
    let value = value.trim_ascii_start();
    let (&quote, rest) = value.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label_end = rest.iter().position(|&b| b == quote)?;
    Encoding::for_label(&rest[..label_end])
}

fn read_domain(node: Node<'_, '_>, warnings: &mut Vec<StructureWarning>) -> Option<Section> {
    let tag = tag_of(node);
    if tag != DOMAIN_TAG {
        warnings.push(StructureWarning::UnexpectedDomainTag {
            found: tag.into_owned(),
        });
        return None;
    }

    let Some(id) = non_empty_id(node) else {
        warnings.push(StructureWarning::MissingDomainId);
        return None;
    };

    let mut section = Section::new(id);
    for child in node.children().filter(|n| n.is_element()) {
        if let Some((key, value)) = read_key(child, id, warnings) {
            section.push(key, value);
        }
    }
    Some(section)
}

fn read_key<'a>(
    node: Node<'a, '_>,
    domain: &str,
    warnings: &mut Vec<StructureWarning>,
) -> Option<(&'a str, String)> {
    let tag = tag_of(node);
    if tag != KEY_TAG {
        warnings.push(StructureWarning::UnexpectedKeyTag {
            found: tag.into_owned(),
            domain: domain.to_string(),
        });
        return None;
    }

    let Some(key) = non_empty_id(node) else {
        warnings.push(StructureWarning::MissingKeyId {
            domain: domain.to_string(),
        });
        return None;
    };

    Some((key, text_of(node)))
}

/// Text before the first child element, with comments and processing instructions dropped.
fn text_of(node: Node<'_, '_>) -> String {
    node.children()
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn non_empty_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute(ID_ATTRIBUTE).filter(|id| !id.is_empty())
}

/// Element name in `{namespace}local` form when namespaced, bare local name otherwise.
fn tag_of<'a>(node: Node<'a, '_>) -> Cow<'a, str> {
    let name = node.tag_name();
    match name.namespace() {
        Some(namespace) => Cow::Owned(format!("{{{}}}{}", namespace, name.name())),
        None => Cow::Borrowed(name.name()),
    }
}
