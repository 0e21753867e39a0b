//! Test builders — ergonomic constructors for raw reqlog lines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

// ---------------------------------------------------------------------------
// ReqLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw reqlog lines.
///
/// # Example
///
/// ```rust
/// let line = ReqLineBuilder::new()
///     .ids("app1", "repoA")
///     .time_seconds(1_500_000_000)
///     .length("500")
///     .build();
/// ```
pub struct ReqLineBuilder {
    prefix: String,
    service: String,
    time: String,
    method: String,
    path: String,
    request_header: String,
    status: String,
    response_header: String,
    length: String,
    long_layout: bool,
}

impl ReqLineBuilder {
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            service: "LogService".to_string(),
            time: "15000000000000000".to_string(),
            method: "POST".to_string(),
            path: "/v5/repos/repoA/data".to_string(),
            request_header: r#"{"Content-Length":"100","Host":"logdb.qiniu.com"}"#.to_string(),
            status: "200".to_string(),
            response_header: response_header("app1", "repoA"),
            length: "100".to_string(),
            long_layout: false,
        }
    }

    /// Text placed before the `REQ` marker.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Raw time field, in the log's 100ns units.
    pub fn time_raw(mut self, raw: impl Into<String>) -> Self {
        self.time = raw.into();
        self
    }

    pub fn time_seconds(self, seconds: i64) -> Self {
        self.time_raw((seconds * 10_000_000).to_string())
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn ids(mut self, app_id: &str, repo: &str) -> Self {
        self.response_header = response_header(app_id, repo);
        self
    }

    pub fn response_header_raw(mut self, raw: impl Into<String>) -> Self {
        self.response_header = raw.into();
        self
    }

    pub fn request_header_raw(mut self, raw: impl Into<String>) -> Self {
        self.request_header = raw.into();
        self
    }

    pub fn length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    /// Emit the 14-field layout instead of the 12-field one.
    pub fn long_layout(mut self) -> Self {
        self.long_layout = true;
        self
    }

    pub fn build(self) -> String {
        let mut fields = vec![
            "REQ".to_string(),
            self.service,
            self.time,
            self.method,
            self.path,
            self.request_header,
            String::new(),
            self.status,
            self.response_header,
            "51".to_string(),
            self.length,
            String::new(),
        ];
        if self.long_layout {
            fields.push("extra".to_string());
            fields.push("123".to_string());
        }
        format!("{}{}", self.prefix, fields.join("\t"))
    }
}

impl Default for ReqLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Response-header JSON blob carrying the given ids.
pub fn response_header(app_id: &str, repo: &str) -> String {
    serde_json::json!({
        "Content-Type": "application/json",
        "X-Appid": app_id,
        "X-Repo": repo,
        "X-Reqid": "gm8AAOWGuzupItEU",
    })
    .to_string()
}

/// A valid line for `app_id`/`repo` at `seconds` with the given flow.
pub fn flow_line(app_id: &str, repo: &str, seconds: i64, flow: u64) -> String {
    ReqLineBuilder::new()
        .ids(app_id, repo)
        .time_seconds(seconds)
        .length(flow.to_string())
        .build()
}
