//! Loads vector suites from TOML files.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::model::TestSuite;

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("data")
}

/// Load `src/vectors/data/<name>.toml`
pub fn load_suite(name: &str) -> Result<TestSuite> {
    let path = vectors_dir().join(format!("{}.toml", name));
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
