//! Streaming body decoders

use std::io::{self, Write};

use flate2::write::{GzDecoder, ZlibDecoder};

use crate::error::FetchError;

/// Encodings accepted in a `Content-Encoding` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Identity,
    Gzip,
    Deflate,
}

impl ContentEncoding {
    /// Parse a header value. Anything but identity, gzip, or deflate fails.
    pub fn from_header(value: &str) -> Result<Self, FetchError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "identity" => Ok(Self::Identity),
            "gzip" | "x-gzip" => Ok(Self::Gzip),
            "deflate" => Ok(Self::Deflate),
            _ => Err(FetchError::UnsupportedEncoding(value.to_string())),
        }
    }
}

/// Decoder that writes decoded bytes into a sink as chunks arrive.
pub enum BodyDecoder<W: Write> {
    Identity(W),
    Gzip(GzDecoder<W>),
    /// HTTP deflate is zlib-wrapped.
    Deflate(ZlibDecoder<W>),
}

impl<W: Write> BodyDecoder<W> {
    pub fn new(encoding: ContentEncoding, sink: W) -> Self {
        match encoding {
            ContentEncoding::Identity => Self::Identity(sink),
            ContentEncoding::Gzip => Self::Gzip(GzDecoder::new(sink)),
            ContentEncoding::Deflate => Self::Deflate(ZlibDecoder::new(sink)),
        }
    }

    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        match self {
            Self::Identity(w) => w.write_all(chunk),
            Self::Gzip(d) => d.write_all(chunk),
            Self::Deflate(d) => d.write_all(chunk),
        }
    }

    /// Flush the remaining output and hand back the sink.
    pub fn finish(self) -> io::Result<W> {
        match self {
            Self::Identity(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Self::Gzip(d) => d.finish(),
            Self::Deflate(d) => d.finish(),
        }
    }
}
