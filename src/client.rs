use log::{debug, error, info, trace};
use reqwest::Method;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use crate::config::{ClientConfig, TABLE_PLACEHOLDER, load_config};
use crate::error::{Error, Result};
use crate::record::{Payload, Record};

const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Fixed HTTP timeout; applied once at construction, not per call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A blocking Airtable API client bound to a single base.
///
/// Holds the bearer token, the resolved URL template and a reusable HTTP
/// client. The configuration is immutable after construction; connection
/// pooling across sequential sends is left to the underlying HTTP stack.
#[derive(Debug, Clone)]
pub struct Client {
    key: String,
    url_template: String,
    http: HttpClient,
}

/// One request against a table: method, fully resolved URL and the record
/// payload that becomes the JSON body. Built per call, never reused.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub payload: Payload,
}

impl Request {
    /// Appends a record to the payload, preserving insertion order.
    pub fn add_record(&mut self, record: Record) {
        self.payload.records.push(record);
        trace!("payload records after append: {:?}", self.payload.records);
    }
}

impl Client {
    /// Creates a client from the `AIRTABLE_KEY`, `AIRTABLE_BASE` and
    /// `AIRTABLE_HOST` environment variables.
    ///
    /// This is equivalent to `Client::new(None, None, None)`.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    /// Creates a client using (in order of precedence):
    /// - explicit `key`/`base`/`host` arguments
    /// - environment variables `AIRTABLE_KEY` / `AIRTABLE_BASE` / `AIRTABLE_HOST`
    ///
    /// `host` falls back to the public Airtable endpoint when absent.
    pub fn new(key: Option<String>, base: Option<String>, host: Option<String>) -> Result<Self> {
        let cfg = load_config(key, base, host)?;
        info!("starting Airtable client");

        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self::from_config(cfg, http))
    }

    fn from_config(cfg: ClientConfig, http: HttpClient) -> Self {
        Self {
            key: cfg.key,
            url_template: cfg.url_template,
            http,
        }
    }

    /// Builds a request against `table` with an empty payload.
    ///
    /// The URL is resolved here by substituting the table name into the
    /// configured template; `send` refuses anything left unresolved.
    pub fn request(&self, method: Method, table: &str) -> Request {
        let url = self.url_template.replacen(TABLE_PLACEHOLDER, table, 1);
        trace!("request URL: {}", url);

        Request {
            method,
            url,
            payload: Payload::default(),
        }
    }

    /// Builds a GET for a single record: the table URL suffixed with
    /// `/<record_id>`.
    pub fn get_record_request(&self, table: &str, record_id: &str) -> Request {
        let mut request = self.request(Method::GET, table);
        request.url = format!("{}/{}", request.url, record_id);
        trace!("record URL: {}", request.url);
        request
    }

    /// Builds a GET with a caller-supplied query-string fragment appended
    /// verbatim. The caller is responsible for encoding; no validation is
    /// performed here.
    pub fn filter_record_request(&self, table: &str, filter_query: &str) -> Request {
        let mut request = self.request(Method::GET, table);
        request.url = format!("{}{}", request.url, filter_query);
        trace!("filter URL: {}", request.url);
        request
    }

    /// Sends the request once and returns the raw response bytes.
    ///
    /// The payload is serialized as the JSON body, the bearer token goes in
    /// the `Authorization` header, and any HTTP status >= 300 becomes
    /// [`Error::Server`]. The body is not parsed on success; callers decode
    /// the [`Payload`] envelope themselves. No retries.
    pub fn send(&self, request: &Request) -> Result<Vec<u8>> {
        if request.url.is_empty() || request.url.contains(TABLE_PLACEHOLDER) {
            error!("refusing to send unresolved request URL: {}", request.url);
            return Err(Error::InvalidRequest {
                message: format!("request URL is not resolved: {}", request.url),
            });
        }

        let body = serde_json::to_vec(&request.payload)?;

        debug!("sending {} request to {}", request.method, request.url);

        let response = self
            .http
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
            .body(body)
            .send()
            .inspect_err(|e| error!("error sending request to {}: {}", request.url, e))?;

        let status = response.status();

        // A partial body read aborts the call rather than handing back a
        // truncated buffer.
        let bytes = response
            .bytes()
            .inspect_err(|e| error!("error reading response body from {}: {}", request.url, e))?;

        trace!("got {} response bytes", bytes.len());

        if status.as_u16() >= 300 {
            error!(
                "Airtable returned an error status {} for {}",
                status, request.url
            );
            return Err(Error::Server {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        Ok(bytes.to_vec())
    }
}
