use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use embedded_kernel_firmware::{config, fetch_and_convert, Config, OutputMode};

#[derive(Parser)]
#[clap(name = "embedded-kernel-firmware-cli")]
#[clap(about = "Download MicroPython firmware and repackage it for the embedded kernel frontend")]
struct Cli {
    /// Source URL for the firmware image
    #[clap(long, default_value = config::FIRMWARE_URL)]
    url: String,

    /// Destination path (defaults depend on the output mode)
    #[clap(long)]
    output: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the firmware as a TypeScript module for bundling into the frontend
    Embed,
    /// Write the firmware as a raw image under the static files directory
    Raw,
}

fn tool() -> Result<(), String> {
    let cli = Cli::parse();

    let mode = match cli.command {
        Command::Embed => OutputMode::SourceEmbedded,
        Command::Raw => OutputMode::RawBinary,
    };

    let config = Config::new(cli.url, mode, cli.output);

    match fetch_and_convert(&config) {
        Ok(()) => Ok(()),
        Err(err) => Err(format!("failed to convert firmware: {}", err)),
    }
}

fn main() {
    match tool() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("embedded-kernel-firmware: {}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
