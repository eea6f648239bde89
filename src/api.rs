use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::ResultExt;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::config::{normalize_base_url, Config};
use crate::error::{DecodeSnafu, Error, InvalidBaseUrlSnafu, NotFoundSnafu, Result, StatusSnafu};
use crate::params::query_pairs;
use crate::transport::{HttpTransport, Transport};

#[derive(Deserialize)]
struct Envelope {
    data: Value,
}

/// What is left of the envelope on an error status.
#[derive(Deserialize)]
struct ErrorBody {
    meta: Option<Meta>,
}

#[derive(Deserialize)]
struct Meta {
    msg: Option<String>,
}

/// The request helper shared by every resource client: builds the URL, adds
/// the key and the present options, performs the GET and unwraps `data`.
#[derive(Clone)]
pub struct Api {
    api_key: String,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Api {
    /// Default base URL and timeout, talking HTTP through reqwest.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&Config::new(api_key))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(
            config.api_key.clone(),
            config.base_url.as_str(),
            Arc::new(transport),
        )
    }

    pub fn with_transport(
        api_key: impl Into<String>,
        base_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Api {
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url)?,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL from percent-encoded path segments plus the query string.
    pub(crate) fn url<P>(&self, segments: &[&str], params: &P) -> Result<Url>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                InvalidBaseUrlSnafu {
                    url: self.base_url.as_str(),
                }
                .build()
            })?
            .pop_if_empty()
            .extend(segments);

        let pairs = query_pairs(params)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET the endpoint and hand its `data` value to `map`.
    pub(crate) fn request<P, T, F>(&self, segments: &[&str], params: &P, map: F) -> Result<T>
    where
        P: Serialize + ?Sized,
        F: FnOnce(Value) -> Result<T>,
    {
        let url = self.url(segments, params)?;
        let path = url.path().to_string();
        log::debug!("GET {}", path);

        let res = self.transport.get(&url)?;

        if !res.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&res.body)
                .ok()
                .and_then(|e| e.meta)
                .and_then(|m| m.msg)
                .unwrap_or_else(|| res.body.chars().take(200).collect());
            log::warn!("GIPHY API: HTTP {} for {}: {}", res.status, path, message);

            if res.status == 404 {
                return NotFoundSnafu { what: path }.fail();
            }
            return StatusSnafu {
                path,
                status: res.status,
                message,
            }
            .fail();
        }

        let envelope: Envelope =
            serde_json::from_str(&res.body).context(DecodeSnafu { path: path.clone() })?;
        log::trace!("GET {}: {} bytes", path, res.body.len());

        map(envelope.data).map_err(|e| match e {
            Error::Decode { source, .. } => Error::Decode { path, source },
            other => other,
        })
    }

    /// GET the endpoint and deserialize its `data` value as `T`.
    pub(crate) fn get<P, T>(&self, segments: &[&str], params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(segments, params, parse)
    }

    /// Like `get`, for endpoints returning a single object: an empty payload
    /// means nothing matched.
    pub(crate) fn get_one<P, T>(&self, segments: &[&str], params: &P, what: &str) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(segments, params, |data| {
            if is_empty(&data) {
                return NotFoundSnafu { what }.fail();
            }
            parse(data)
        })
        .map_err(|e| match e {
            Error::NotFound { .. } => Error::NotFound {
                what: what.to_string(),
            },
            other => other,
        })
    }
}

pub(crate) fn parse<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).context(DecodeSnafu { path: "" })
}

/// A list payload where `null`, `{}` or `[]` all mean "no results".
pub(crate) fn list<T: DeserializeOwned>(data: Value) -> Result<Vec<T>> {
    if is_empty(&data) {
        return Ok(Vec::new());
    }
    parse(data)
}

pub(crate) fn truncate<T>(items: &mut Vec<T>, limit: Option<u32>) {
    if let Some(limit) = limit {
        items.truncate(limit as usize);
    }
}

/// `null`, `[]` and `{}` all mean "nothing here".
pub(crate) fn is_empty(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
