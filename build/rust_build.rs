/**
 * Compiles the libphonenumber prefix resources (geocoding, carrier and
 * timezones) into static tables, the way tools/cpp does for the C++ library.
 */

use std::{
    collections::BTreeMap,
    env,
    fmt::Write as _,
    fs::{self, File},
    io::{BufRead, BufReader},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} of {path} is too long (max is {max_len} bytes)")]
    LineTooLong { path: String, line_num: usize, max_len: usize },

    #[error("Failed to parse prefix '{prefix}' in {path}: {source}")]
    PrefixParseError {
        path: String,
        prefix: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Resource file name {0} is not a country calling code")]
    InvalidFileName(String),

    #[error("{0}")]
    Format(#[from] std::fmt::Error),

    #[error("OUT_DIR is not set")]
    NoOutDir,
}

const RESOURCES_DIR: &str = "resources";

fn parse_prefixes(path: &Path, prefixes: &mut BTreeMap<u64, String>) -> Result<(), BuildError> {
    prefixes.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                path: path.display().to_string(),
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((prefix_str, desc)) = line.split_once('|') {
            if prefix_str.is_empty() {
                continue;
            }
            let prefix_code = prefix_str.parse().map_err(|e| BuildError::PrefixParseError {
                path: path.display().to_string(),
                prefix: prefix_str.to_string(),
                source: e,
            })?;
            prefixes.insert(prefix_code, desc.to_string());
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}

fn write_entries(out: &mut String, prefixes: &BTreeMap<u64, String>) -> Result<(), BuildError> {
    out.push_str("&[");
    for (prefix, value) in prefixes {
        write!(out, "({}, {:?}),", prefix, value)?;
    }
    out.push(']');
    Ok(())
}

/// Emits `resources/<kind>/<language>/<calling code>.txt` as a slice of
/// `PrefixFile` named `static_name`.
fn write_language_tables(out: &mut String, kind: &str, static_name: &str) -> Result<(), BuildError> {
    let root = Path::new(RESOURCES_DIR).join(kind);
    let mut prefixes = BTreeMap::new();

    writeln!(out, "pub static {}: &[PrefixFile] = &[", static_name)?;
    for language_dir in sorted_entries(&root)? {
        if !language_dir.is_dir() {
            continue;
        }
        let language = language_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_owned();

        for file in sorted_entries(&language_dir)? {
            if file.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }
            let stem = file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let country_code: u16 = stem
                .parse()
                .map_err(|_| BuildError::InvalidFileName(file.display().to_string()))?;

            parse_prefixes(&file, &mut prefixes)?;
            write!(
                out,
                "    PrefixFile {{ language: {:?}, country_code: {}, entries: ",
                language, country_code
            )?;
            write_entries(out, &prefixes)?;
            out.push_str(" },\n");
        }
    }
    out.push_str("];\n\n");
    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", RESOURCES_DIR);

    let mut out = String::new();
    write_language_tables(&mut out, "geocoding", "GEOCODING")?;
    write_language_tables(&mut out, "carrier", "CARRIER")?;

    let mut prefixes = BTreeMap::new();
    parse_prefixes(
        &Path::new(RESOURCES_DIR).join("timezones").join("map_data.txt"),
        &mut prefixes,
    )?;
    out.push_str("pub static TIMEZONES: &[(u64, &str)] = ");
    write_entries(&mut out, &prefixes)?;
    out.push_str(";\n");

    let out_dir = env::var_os("OUT_DIR").ok_or(BuildError::NoOutDir)?;
    fs::write(Path::new(&out_dir).join("prefix_data.rs"), out)?;
    Ok(())
}
