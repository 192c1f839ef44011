//! Typed Rust client for the Pingen postal and fax delivery HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for wire-format
//! quirks (path templating, token-in-URL authentication, PDF/PNG sniffing), and a small client
//! layer with one method per endpoint.
//!
//! ```rust,no_run
//! use pingen::{PingenClient, Token, UploadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pingen::PingenError> {
//!     let client = PingenClient::new(Token::new("...")?);
//!     let options = UploadOptions {
//!         send: true,
//!         ..Default::default()
//!     };
//!     let uploaded = client.document_upload("example.pdf", options).await?;
//!     println!("{:?}", uploaded.get("send"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PingenClient, PingenClientBuilder, PingenError};
pub use domain::{
    BinaryKind, Color, ConfigurationError, CountryCode, Currency, Environment, FaxCalculation,
    FaxNumber, Filters, ListOptions, PostCalculation, PostEncoding, PreviewOptions, SendOptions,
    ServiceResponse, SortDirection, Speed, SpeedLookup, Token, UploadOptions,
};
