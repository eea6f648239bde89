use serde_json::Value;

use crate::api::{list, parse, Api};
use crate::error::{Error, Result};
use crate::models::Emoji;
use crate::params::Page;

#[derive(Debug, Clone)]
pub struct EmojiClient {
    api: Api,
}

impl EmojiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api(Api::new(api_key)?))
    }

    pub fn with_api(api: Api) -> Self {
        EmojiClient { api }
    }

    /// One page of the emoji catalog.
    pub fn fetch(&self, page: &Page) -> Result<Vec<Emoji>> {
        self.api.request(&["v2", "emoji"], page, list)
    }

    /// The emoji with its alternate renderings attached, or `None` when the
    /// server has no variation data for it, unknown ids included.
    pub fn get_variations(&self, emoji_id: &str) -> Result<Option<Emoji>> {
        let found = self
            .api
            .request(&["v2", "emoji", emoji_id, "variations"], &(), |data| {
                Ok(with_variations(emoji_id, renderings(data)?))
            });
        match found {
            Err(Error::NotFound { .. }) => Ok(None),
            other => other,
        }
    }
}

/// Variations come as a list, a lone object, or nested one level deeper
/// under another `data` key.
fn renderings(data: Value) -> Result<Vec<Emoji>> {
    match data {
        Value::Object(mut map) if map.contains_key("data") => {
            renderings(map.remove("data").unwrap_or(Value::Null))
        }
        Value::Object(map) if !map.is_empty() => parse(Value::Object(map)).map(|e| vec![e]),
        other => list(other),
    }
}

/// The rendering whose id matches (or the first one) becomes the base emoji,
/// every other rendering one of its variations.
fn with_variations(emoji_id: &str, mut renderings: Vec<Emoji>) -> Option<Emoji> {
    if renderings.is_empty() {
        return None;
    }
    let base = renderings
        .iter()
        .position(|e| e.id == emoji_id)
        .unwrap_or(0);
    let mut emoji = renderings.remove(base);
    emoji.variations = renderings;
    Some(emoji)
}
