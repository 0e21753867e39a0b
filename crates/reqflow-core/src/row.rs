//! Row — one validated reqlog line with lazily decoded header blobs.
//!
//! Both reqlog layouts (12 and 14 fields) share the leading positions read
//! here, so a single set of index constants serves both. The byte length is
//! always read from [`REQUEST_LENGTH`], whichever layout the row has.
//!
//! Every getter is best-effort: malformed JSON or non-numeric fields yield
//! `0` or `""` and a diagnostic, never an error. A header key that is
//! present but `null` reads as `""`. Header keys match in their canonical
//! (`X-Appid`) or all-lowercase (`x-appid`) spelling; other casings are
//! ignored.
//!
//! ```text
//! REQ  LogService  15000182611599302  POST  /v5/repos/…  {req header}  …  200  {resp header}  …  51  12622979
//!  0       1               2            3        4             5            7        8             10
//! ```

use std::cell::OnceCell;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub const SERVICE: usize = 1;
pub const TIME: usize = 2;
pub const METHOD: usize = 3;
pub const PATH: usize = 4;
pub const REQUEST_HEADER: usize = 5;
pub const STATUS: usize = 7;
pub const RESPONSE_HEADER: usize = 8;
pub const REQUEST_LENGTH: usize = 10;

/// Raw time values are in units of 100ns.
pub const TIME_UNITS_PER_SECOND: i64 = 10_000_000;

// ---------------------------------------------------------------------------
// Header blobs
// ---------------------------------------------------------------------------

/// The part of the request-header JSON blob reqflow cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestHeader {
    #[serde(
        rename = "Content-Length",
        alias = "content-length",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub content_length: String,
}

/// The part of the response-header JSON blob reqflow cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "X-Repo", alias = "x-repo", default, deserialize_with = "null_as_empty")]
    pub repo: String,
    #[serde(rename = "X-Appid", alias = "x-appid", default, deserialize_with = "null_as_empty")]
    pub app_id: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// A parsed reqlog line. Build one with [`parse_line`](crate::parse_line).
///
/// The two header slots fill in on the first successful decode. A failed
/// decode leaves the slot empty, so the next read tries again. The slots use
/// [`OnceCell`], which keeps a `Row` on a single thread.
#[derive(Debug)]
pub struct Row {
    fields: Vec<String>,
    request_header: OnceCell<RequestHeader>,
    response_header: OnceCell<ResponseHeader>,
}

impl Row {
    /// Wrap an already validated field list.
    pub(crate) fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            request_header: OnceCell::new(),
            response_header: OnceCell::new(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn service_name(&self) -> &str {
        &self.fields[SERVICE]
    }

    pub fn method(&self) -> &str {
        &self.fields[METHOD]
    }

    pub fn request_path(&self) -> &str {
        &self.fields[PATH]
    }

    /// HTTP status of the response, if the field is a valid status number.
    pub fn status_code(&self) -> Option<u16> {
        self.fields[STATUS].parse().ok()
    }

    /// Request body length in bytes, the flow metric. Zero when the field is
    /// empty, non-numeric or not positive.
    pub fn request_byte_length(&self) -> u64 {
        positive_or_zero(&self.fields[REQUEST_LENGTH])
    }

    /// `Content-Length` from the request-header blob. Informational only;
    /// aggregation uses [`request_byte_length`](Self::request_byte_length).
    pub fn decoded_request_content_length(&self) -> u64 {
        self.request_header()
            .map(|h| positive_or_zero(&h.content_length))
            .unwrap_or(0)
    }

    /// Request time in epoch seconds. Zero if the time field is not an
    /// integer.
    pub fn request_time_seconds(&self) -> i64 {
        let raw = &self.fields[TIME];
        match raw.parse::<i64>() {
            Ok(t) => t / TIME_UNITS_PER_SECOND,
            Err(err) => {
                tracing::error!(time = %raw, error = %err, "cannot parse request time");
                0
            }
        }
    }

    /// `X-Appid` from the response-header blob, or `""` if it cannot be decoded.
    pub fn application_id(&self) -> &str {
        self.response_header().map_or("", |h| h.app_id.as_str())
    }

    /// `X-Repo` from the response-header blob, or `""` if it cannot be decoded.
    pub fn repository_id(&self) -> &str {
        self.response_header().map_or("", |h| h.repo.as_str())
    }

    fn request_header(&self) -> Option<&RequestHeader> {
        decode_cached(&self.request_header, &self.fields[REQUEST_HEADER], "request")
    }

    fn response_header(&self) -> Option<&ResponseHeader> {
        decode_cached(&self.response_header, &self.fields[RESPONSE_HEADER], "response")
    }
}

fn decode_cached<'a, T: DeserializeOwned>(
    slot: &'a OnceCell<T>,
    raw: &str,
    kind: &'static str,
) -> Option<&'a T> {
    if let Some(header) = slot.get() {
        return Some(header);
    }
    match serde_json::from_str::<T>(raw) {
        Ok(header) => Some(slot.get_or_init(|| header)),
        Err(err) => {
            tracing::warn!(header = kind, raw = %raw, error = %err, "cannot decode header");
            None
        }
    }
}

fn positive_or_zero(raw: &str) -> u64 {
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
