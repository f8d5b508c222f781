//! A small blocking Rust client for the Airtable REST API.
//!
//! This crate implements the minimal Airtable flow:
//! build an authenticated request against a table in one base, send it once,
//! and get the raw response bytes back (or a classified error).
//!
//! ## Quick start
//! - Configure authentication via environment variables (`AIRTABLE_KEY`,
//!   `AIRTABLE_BASE`, optionally `AIRTABLE_HOST`).
//! - Build a request with [`Client::request`], [`Client::get_record_request`]
//!   or [`Client::filter_record_request`], then pass it to [`Client::send`].
//!
//! ```no_run
//! use airtable::{Client, Record};
//! use reqwest::Method;
//! use serde_json::json;
//!
//! fn main() -> Result<(), airtable::Error> {
//!     let client = Client::from_env()?;
//!
//!     let mut request = client.request(Method::POST, "Users");
//!     request.add_record(Record::with_fields(json!({ "Name": "Alice" })));
//!
//!     let body = client.send(&request)?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```
//!
//! Response bodies are handed back unparsed; decode the [`Payload`] envelope
//! yourself when you need the record data. Logging goes through the `log`
//! facade, so install whatever logger your application uses at startup.

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod record;

pub use client::{Client, Request};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use record::{Payload, Record};
