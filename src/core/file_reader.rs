//! Input reading
//!
//! Provides consistent handling for:
//! - stdin (`-`) versus file paths
//! - Oversized inputs
//! - Non-UTF-8 content

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default maximum input size in bytes (64 MB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024;

/// Path value that selects stdin
pub const STDIN_PATH: &str = "-";

/// Configuration for reading input
#[derive(Debug, Clone, Copy)]
pub struct InputConfig {
    /// Inputs larger than this are refused
    pub max_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Text read from an input source
#[derive(Debug, Clone)]
pub struct InputText {
    /// Decoded content
    pub content: String,

    /// Display name of the source
    pub source: String,

    /// Whether invalid UTF-8 was replaced
    pub lossy_conversion: bool,
}

/// Read the whole input at `path`, or stdin when the path is `-`
pub fn read_input(path: &Path, config: &InputConfig) -> Result<InputText> {
    if path.as_os_str() == STDIN_PATH {
        let stdin = std::io::stdin();
        let bytes = read_limited(stdin.lock(), config.max_bytes)
            .context("Failed to read items from stdin")?;
        return Ok(decode(bytes, "<stdin>".to_string()));
    }

    let metadata =
        std::fs::metadata(path).with_context(|| format!("Cannot read input: {:?}", path))?;
    if metadata.is_dir() {
        bail!("Input {:?} is a directory, expected a file", path);
    }
    if metadata.len() > config.max_bytes {
        bail!(
            "Input {:?} exceeds size limit ({} > {} bytes)",
            path,
            metadata.len(),
            config.max_bytes
        );
    }

    let file = File::open(path).with_context(|| format!("Failed to open input: {:?}", path))?;
    let bytes = read_limited(file, config.max_bytes)
        .with_context(|| format!("Failed to read input: {:?}", path))?;
    Ok(decode(bytes, path.display().to_string()))
}

/// Read at most `max_bytes`, failing if the source has more
fn read_limited<R: Read>(reader: R, max_bytes: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        bail!("Input exceeds size limit of {} bytes", max_bytes);
    }
    Ok(bytes)
}

fn decode(bytes: Vec<u8>, source: String) -> InputText {
    match String::from_utf8(bytes) {
        Ok(content) => InputText {
            content,
            source,
            lossy_conversion: false,
        },
        Err(e) => InputText {
            content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            source,
            lossy_conversion: true,
        },
    }
}
