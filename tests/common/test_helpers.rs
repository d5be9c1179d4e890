use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test fixture paths
pub struct TestFixtures {
    pub fixtures_dir: PathBuf,
}

impl TestFixtures {
    pub fn new() -> Self {
        let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures");

        Self { fixtures_dir }
    }

    pub fn xml_valid_dir(&self) -> PathBuf {
        self.fixtures_dir.join("xml").join("valid")
    }

    pub fn ini_dir(&self) -> PathBuf {
        self.fixtures_dir.join("ini")
    }

    pub fn example_xml(&self) -> PathBuf {
        self.xml_valid_dir().join("example.xml")
    }

    pub fn example_ini(&self) -> PathBuf {
        self.ini_dir().join("example.ini")
    }

    pub fn config_xml(&self) -> PathBuf {
        self.xml_valid_dir().join("config.xml")
    }

    pub fn config_ini(&self) -> PathBuf {
        self.ini_dir().join("config.ini")
    }

    pub fn warnings_xml(&self) -> PathBuf {
        self.fixtures_dir
            .join("xml")
            .join("warnings")
            .join("mixed.xml")
    }

    pub fn latin1_xml(&self) -> PathBuf {
        self.fixtures_dir
            .join("xml")
            .join("encoding")
            .join("latin1.xml")
    }

    pub fn malformed_xml(&self) -> PathBuf {
        self.fixtures_dir
            .join("xml")
            .join("malformed")
            .join("not_well_formed.xml")
    }

    pub fn wrong_root_xml(&self) -> PathBuf {
        self.fixtures_dir
            .join("xml")
            .join("wrong_root")
            .join("notmuseekd.xml")
    }
}

impl Default for TestFixtures {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a fixture file as text
pub fn read_fixture(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Write `xml` to `config.xml` inside `dir` and return its path
pub fn write_config(dir: &TempDir, xml: &str) -> PathBuf {
    let path = dir.path().join("config.xml");
    fs::write(&path, xml).unwrap();
    path
}

/// Lay out `<home>/.museekd/config.xml` so the default path resolves to it
pub fn create_home_with_config(xml: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".museekd");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.xml"), xml).unwrap();
    home
}
