//! JSON document loading and writing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::model::{Dataset, Dimension, MapEntry, Profile};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse '{}'", path.display()))
}

pub fn load_dimensions(path: &Path) -> Result<Vec<Dimension>> {
    read_json(path)
}

pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    read_json(path)
}

/// Load and validate both input documents.
pub fn load_dataset(dimensions_path: &Path, profiles_path: &Path) -> Result<Dataset> {
    let dimensions = load_dimensions(dimensions_path)?;
    let profiles = load_profiles(profiles_path)?;
    Dataset::new(dimensions, profiles)
        .with_context(|| format!("invalid dimensions in '{}'", dimensions_path.display()))
}

/// Serialize `value` as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the output document.
pub fn write_map(path: &Path, entries: &[MapEntry]) -> Result<()> {
    let json = to_pretty_json(&entries)?;
    let file =
        File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{json}")
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
