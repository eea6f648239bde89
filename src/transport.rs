use reqwest::blocking::Client;
use snafu::ResultExt;
use std::time::Duration;
use url::Url;

use crate::error::{ClientSnafu, Result, TransportSnafu};

/// Status and body of a GET, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Synchronous HTTP GET. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<RawResponse>;
}

/// The default transport, a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(ClientSnafu)?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        let path = url.path().to_string();
        let res = self
            .client
            .get(url.clone())
            .send()
            .context(TransportSnafu { path: path.clone() })?;

        let status = res.status().as_u16();
        let body = res.text().context(TransportSnafu { path })?;

        Ok(RawResponse { status, body })
    }
}
