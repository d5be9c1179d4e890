use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use muxml2ini::{ConvertError, convert};

use crate::common::test_helpers::TestFixtures;

#[test]
fn test_missing_file_is_io_error() {
    let path = PathBuf::from("/nonexistent/directory/config.xml");
    let err = convert(&path).unwrap_err();

    match &err {
        ConvertError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected ConvertError::Io, got {:?}", other),
    }
    assert!(err.to_string().contains("/nonexistent/directory/config.xml"));
}

#[test]
fn test_malformed_xml_is_parse_error() {
    let fixtures = TestFixtures::new();
    let err = convert(&fixtures.malformed_xml()).unwrap_err();

    assert!(matches!(err, ConvertError::Parse { .. }));
    assert!(err.to_string().contains("not_well_formed.xml"));
    assert!(err.source().is_some());
}

#[test]
fn test_anyhow_wraps_convert_error() {
    let fixtures = TestFixtures::new();
    let err: anyhow::Error = convert(&fixtures.wrong_root_xml()).unwrap_err().into();

    assert_eq!(err.to_string(), "Root element 'notmuseekd' must be 'museekd'");
    assert!(err.downcast_ref::<ConvertError>().is_some());
}

#[test]
fn test_undecodable_bytes_are_parse_class_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.xml");
    fs::write(&path, b"<museekd><domain id=\"d\"><key id=\"k\">caf\xe9</key></domain></museekd>")
        .unwrap();

    let err = convert(&path).unwrap_err();
    match &err {
        ConvertError::Decode { encoding, .. } => assert_eq!(*encoding, "UTF-8"),
        other => panic!("Expected ConvertError::Decode, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Could not parse configuration file"));
}
