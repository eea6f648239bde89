//! Per-operation options. Every `None` field is left out of the query string
//! entirely; the API treats `rating=` differently from no rating at all.

use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;

use crate::error::{EncodeSnafu, Result};

/// Content rating filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    #[serde(rename = "g")]
    G,
    #[serde(rename = "pg")]
    Pg,
    #[serde(rename = "pg-13")]
    Pg13,
    #[serde(rename = "r")]
    R,
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "pg-13" | "pg13" => Ok(Rating::Pg13),
            "r" => Ok(Rating::R),
            other => Err(format!("unknown rating \"{}\"", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_id: Option<String>,
    /// Rendition bundle to return, e.g. `messaging_non_clips`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Two letter language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_id: Option<String>,
    /// 0 to 10, higher values match the phrase more loosely.
    pub weirdness: u8,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            random_id: None,
            weirdness: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RandomOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_id: Option<String>,
}

/// Options for fetching gifs by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Plain offset/limit paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Page {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Options plus the `q` search term.
#[derive(Serialize)]
pub(crate) struct Query<'a, P> {
    pub q: &'a str,
    #[serde(flatten)]
    pub options: &'a P,
}

/// Options plus the `s` phrase of the translate endpoints.
#[derive(Serialize)]
pub(crate) struct Phrase<'a> {
    pub s: &'a str,
    #[serde(flatten)]
    pub options: &'a TranslateOptions,
}

/// Query string pairs for a serializable options value. Null fields are dropped
/// so an option that serializes to `None` without `skip_serializing_if` is
/// still left out.
pub(crate) fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).context(EncodeSnafu)?;
    let map = match value {
        Value::Object(map) => map,
        _ => return Ok(Vec::new()),
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

/// Joins ids into the single comma separated value the API expects.
pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
