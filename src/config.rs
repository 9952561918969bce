use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::convert::{ConversionTarget, OutputMode};

/// Firmware image pinned for the embedded kernel.
pub const FIRMWARE_URL: &str =
    "https://micropython.org/resources/firmware/ESP32_GENERIC_C3-20241129-v1.24.1.bin";

/// Where the embedded TypeScript module is written, relative to the repository root.
pub const EMBED_DEST: &str = "src/firmware.ts";

/// Directory the frontend serves raw firmware images from.
pub const RAW_DEST_DIR: &str = "files/binaries";

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-invocation settings, defaulted from the constants above.
pub struct Config {
    pub source_url: String,
    pub target: ConversionTarget,
}

impl Config {
    pub fn new(source_url: String, mode: OutputMode, output: Option<PathBuf>) -> Config {
        let path = output.unwrap_or_else(|| default_output(&source_url, mode));
        Config {
            source_url,
            target: ConversionTarget { path, mode },
        }
    }

    /// File name component of the source URL.
    pub fn artifact_name(&self) -> &str {
        artifact_name(&self.source_url)
    }
}

pub fn artifact_name(url: &str) -> &str {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "firmware.bin",
    }
}

fn default_output(url: &str, mode: OutputMode) -> PathBuf {
    match mode {
        OutputMode::SourceEmbedded => PathBuf::from(EMBED_DEST),
        OutputMode::RawBinary => Path::new(RAW_DEST_DIR).join(artifact_name(url)),
    }
}
