use crate::api::{truncate, Api};
use crate::error::Result;
use crate::models::Sticker;
use crate::params::{
    Phrase, Query, RandomOptions, SearchOptions, TranslateOptions, TrendingOptions,
};

const STICKERS: &str = "stickers";

/// The sticker endpoints. Same shapes as the gif ones, different assets.
#[derive(Debug, Clone)]
pub struct StickerClient {
    api: Api,
}

impl StickerClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api(Api::new(api_key)?))
    }

    pub fn with_api(api: Api) -> Self {
        StickerClient { api }
    }

    pub fn fetch_trending(&self, options: &TrendingOptions) -> Result<Vec<Sticker>> {
        let mut stickers: Vec<Sticker> = self.api.get(&["v1", STICKERS, "trending"], options)?;
        truncate(&mut stickers, options.limit);
        Ok(stickers)
    }

    pub fn search(&self, q: &str, options: &SearchOptions) -> Result<Vec<Sticker>> {
        let mut stickers: Vec<Sticker> = self
            .api
            .get(&["v1", STICKERS, "search"], &Query { q, options })?;
        truncate(&mut stickers, options.limit);
        Ok(stickers)
    }

    pub fn translate(&self, phrase: &str, options: &TranslateOptions) -> Result<Sticker> {
        self.api.get_one(
            &["v1", STICKERS, "translate"],
            &Phrase { s: phrase, options },
            &format!("sticker translation of {:?}", phrase),
        )
    }

    /// A random sticker, optionally limited to a tag. This is its own endpoint,
    /// unrelated to `translate`.
    pub fn random(&self, options: &RandomOptions) -> Result<Sticker> {
        let what = match &options.tag {
            Some(tag) => format!("random sticker tagged {:?}", tag),
            None => "random sticker".to_string(),
        };
        self.api.get_one(&["v1", STICKERS, "random"], options, &what)
    }
}
