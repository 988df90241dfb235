//! HTTP client and body streaming

use std::io::Write;
use std::time::Duration;

use reqwest::header::{ACCEPT_ENCODING, CONTENT_ENCODING};
use reqwest::{Client, StatusCode};

use crate::decode::{BodyDecoder, ContentEncoding};
use crate::error::FetchError;

/// Build the HTTP client used for every download in a run.
///
/// Automatic decompression is not enabled on the client; bodies are decoded
/// by [`fetch_to`].
pub fn build_client(user_agent: &str, timeout: Option<Duration>) -> Result<Client, FetchError> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// GET `url` and stream the decoded body into `sink`.
///
/// Fails on any status other than 200 and on any encoding other than
/// identity, gzip, or deflate.
pub async fn fetch_to<W: Write>(client: &Client, url: &str, sink: W) -> Result<W, FetchError> {
    let mut response = client
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let encoding = match response.headers().get(CONTENT_ENCODING) {
        Some(value) => ContentEncoding::from_header(&String::from_utf8_lossy(value.as_bytes()))?,
        None => ContentEncoding::Identity,
    };
    log::debug!("{} answered with {:?} encoding", url, encoding);

    let decode_err = |source| FetchError::Decode {
        url: url.to_string(),
        source,
    };

    let mut decoder = BodyDecoder::new(encoding, sink);
    let mut received = 0usize;
    while let Some(chunk) = response.chunk().await? {
        received += chunk.len();
        decoder.write_chunk(&chunk).map_err(decode_err)?;
    }

    let sink = decoder.finish().map_err(decode_err)?;
    log::debug!("{}: {} bytes on the wire", url, received);

    Ok(sink)
}
