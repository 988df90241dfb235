//! Nano Filters Fetcher
//!
//! Downloads third-party lists over HTTPS. Compressed bodies are decoded by
//! hand from the `Content-Encoding` header so that unexpected encodings fail
//! loudly instead of landing on disk.

pub mod client;
pub mod decode;
pub mod error;

pub use client::{build_client, fetch_to};
pub use decode::{BodyDecoder, ContentEncoding};
pub use error::FetchError;
pub use reqwest::Client;
