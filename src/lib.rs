//! Blocking client for the GIPHY API: gifs, stickers and emoji.
//!
//! ```no_run
//! use giphy_client::{Giphy, SearchOptions};
//!
//! # fn main() -> giphy_client::Result<()> {
//! let giphy = Giphy::new("your-api-key")?;
//! let options = SearchOptions {
//!     limit: Some(5),
//!     ..Default::default()
//! };
//! for gif in giphy.gifs().search("cats", &options)? {
//!     println!("{} {:?}", gif.id, gif.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call is one GET. Nothing is cached or retried, and the clients hold
//! no mutable state, so they can be shared between threads freely.

pub mod api;
pub mod config;
pub mod emoji;
pub mod error;
pub mod gifs;
pub mod models;
pub mod params;
pub mod stickers;
pub mod transport;

pub use api::Api;
pub use config::Config;
pub use emoji::EmojiClient;
pub use error::{Error, Result};
pub use gifs::GifClient;
pub use models::{Category, Channel, ChannelTag, Emoji, Gif, Media, Rendition, Sticker, Term, User};
pub use params::{
    FetchOptions, Page, RandomOptions, Rating, SearchOptions, TranslateOptions, TrendingOptions,
};
pub use stickers::StickerClient;
pub use transport::{HttpTransport, RawResponse, Transport};

/// All three resource clients over one connection.
#[derive(Debug, Clone)]
pub struct Giphy {
    gifs: GifClient,
    stickers: StickerClient,
    emoji: EmojiClient,
}

impl Giphy {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api(Api::new(api_key)?))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_api(Api::from_config(config)?))
    }

    pub fn with_api(api: Api) -> Self {
        Giphy {
            gifs: GifClient::with_api(api.clone()),
            stickers: StickerClient::with_api(api.clone()),
            emoji: EmojiClient::with_api(api),
        }
    }

    pub fn gifs(&self) -> &GifClient {
        &self.gifs
    }

    pub fn stickers(&self) -> &StickerClient {
        &self.stickers
    }

    pub fn emoji(&self) -> &EmojiClient {
        &self.emoji
    }
}
