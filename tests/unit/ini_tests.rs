use muxml2ini::{IniReader, Output, convert};

use crate::common::test_helpers::TestFixtures;

#[test]
fn test_daemon_reads_back_converted_config() {
    let fixtures = TestFixtures::new();
    let conversion = convert(&fixtures.config_xml()).unwrap();
    let text = Output::format_sections(&conversion.sections);

    let document = IniReader::parse(&text);
    assert!(document.warnings.is_empty());
    assert_eq!(document.sections.len(), conversion.sections.len());

    let transfers = document.section("transfers").unwrap();
    assert_eq!(transfers.get("download-dir"), Some("/home/user/downloads"));
    assert_eq!(transfers.get("upload_slots"), Some("2"));

    let bind = document.section("interfaces.bind").unwrap();
    assert_eq!(bind.get("localhost:2240"), Some(""));

    assert_eq!(
        document.section("buddies").unwrap().get("alice"),
        Some("friend & neighbour")
    );
}

#[test]
fn test_reader_matches_expected_fixture() {
    let fixtures = TestFixtures::new();
    let text = std::fs::read_to_string(fixtures.config_ini()).unwrap();

    let document = IniReader::parse(&text);
    let names: Vec<_> = document.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "server",
            "interfaces",
            "interfaces.bind",
            "transfers",
            "buddies",
            "shares"
        ]
    );
    assert_eq!(document.section("server").unwrap().len(), 4);
}
