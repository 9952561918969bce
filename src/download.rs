use reqwest::blocking::Client;

use crate::config;
use crate::error::Error;

/// Downloads the complete resource at `url` into memory.
///
/// A transport-level failure is retried exactly once. A non-success HTTP
/// status is not retried: the server answered, and the answer will not
/// change.
pub fn download(url: &str) -> Result<Vec<u8>, Error> {
    let client = Client::builder()
        .connect_timeout(config::CONNECT_TIMEOUT)
        .timeout(config::REQUEST_TIMEOUT)
        .build()
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    match fetch(&client, url) {
        Ok(firmware) => Ok(firmware),
        Err(err @ Error::Status { .. }) => Err(err),
        Err(err) => {
            eprintln!("download failed ({}), retrying", err);
            fetch(&client, url)
        }
    }
}

fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, Error> {
    let response = client.get(url).send().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    Ok(body.to_vec())
}
