use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds for a fetch-and-convert run, tagged by phase.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level download failure (DNS, connect, timeout, read).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Filesystem failure while writing the converted artifact.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
