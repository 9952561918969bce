use std::fs;
use std::path::PathBuf;

use crate::embed;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// TypeScript module with the firmware inlined as a byte array
    SourceEmbedded,
    /// Byte-for-byte copy served as a static file
    RawBinary,
}

/// Destination path plus output encoding for one run.
#[derive(Debug)]
pub struct ConversionTarget {
    pub path: PathBuf,
    pub mode: OutputMode,
}

impl ConversionTarget {
    /// Writes the firmware to `path` in the selected encoding, overwriting
    /// any existing file. Raw-binary mode creates missing parent directories;
    /// source-embedded mode expects the source tree to already be in place.
    pub fn write(&self, artifact_name: &str, firmware: &[u8]) -> Result<(), Error> {
        match self.mode {
            OutputMode::SourceEmbedded => {
                let module = embed::render_module(artifact_name, firmware);
                self.write_file(module.as_bytes())
            }
            OutputMode::RawBinary => {
                self.create_parent_dirs()?;
                self.write_file(firmware)
            }
        }
    }

    fn create_parent_dirs(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                eprintln!("creating directory {}", parent.display());
                fs::create_dir_all(parent).map_err(|source| Error::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        Ok(())
    }

    fn write_file(&self, contents: &[u8]) -> Result<(), Error> {
        fs::write(&self.path, contents).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}
