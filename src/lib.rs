pub mod config;
pub mod convert;
pub mod download;
pub mod embed;
pub mod util;

mod error;

pub use crate::config::Config;
pub use crate::convert::{ConversionTarget, OutputMode};
pub use crate::error::Error;

/// Fetches the configured firmware image and writes it to the target,
/// reporting progress on stdout.
pub fn fetch_and_convert(config: &Config) -> Result<(), Error> {
    println!("Downloading firmware from {}...", config.source_url);

    let firmware = download::download(&config.source_url)?;
    println!(
        "Downloaded {} bytes (sha256 {})",
        firmware.len(),
        util::sha256(&firmware)
    );

    config.target.write(config.artifact_name(), &firmware)?;
    println!(
        "Successfully wrote firmware data to {}",
        config.target.path.display()
    );

    Ok(())
}
