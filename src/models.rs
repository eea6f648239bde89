//! Response parsers. Unused fields are omitted; anything the payload leaves out
//! stays `None` (or empty) rather than being filled with a made up value.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::ops::Deref;

/// GIPHY writes this instead of leaving a timestamp out.
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

fn timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty() && s != ZERO_DATETIME))
}

/// Flags arrive as `true`, `1` or `"1"` depending on the endpoint.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagValue {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match Option::<FlagValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlagValue::Bool(b)) => Ok(Some(b)),
        Some(FlagValue::Int(i)) => Ok(Some(i != 0)),
        Some(FlagValue::String(s)) => match s.as_str() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            _ => Err(Error::custom(format!("invalid flag: {}", s))),
        },
    }
}

/// Channel ids are numbers, gif ids are strings; keep both as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        String(String),
    }

    Ok(Option::<IdValue>::deserialize(deserializer)?.map(|id| match id {
        IdValue::Int(i) => i.to_string(),
        IdValue::String(s) => s,
    }))
}

/// One size/format variant of an asset. GIPHY sends the numbers as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendition {
    pub url: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub size: Option<String>,
    pub frames: Option<String>,
    pub mp4: Option<String>,
    pub mp4_size: Option<String>,
    pub webp: Option<String>,
    pub webp_size: Option<String>,
    pub hash: Option<String>,
}

impl Rendition {
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let width = self.width.as_ref()?.parse().ok()?;
        let height = self.height.as_ref()?.parse().ok()?;
        Some((width, height))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_image: Option<String>,
    pub banner_url: Option<String>,
    pub profile_url: Option<String>,
    pub website_url: Option<String>,
    pub instagram_url: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_verified: Option<bool>,
}

/// The object shared by the gif, sticker and emoji endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub bitly_url: Option<String>,
    pub embed_url: Option<String>,
    pub title: Option<String>,
    pub rating: Option<String>,
    pub username: Option<String>,
    pub source: Option<String>,
    pub source_tld: Option<String>,
    pub source_post_url: Option<String>,
    pub content_url: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_sticker: Option<bool>,
    #[serde(default, deserialize_with = "timestamp")]
    pub import_datetime: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub trending_datetime: Option<String>,
    /// Renditions keyed by name, e.g. `original`, `fixed_height`, `downsized`.
    #[serde(default)]
    pub images: HashMap<String, Rendition>,
    pub user: Option<User>,
    pub analytics_response_payload: Option<String>,
}

impl Media {
    pub fn rendition(&self, name: &str) -> Option<&Rendition> {
        self.images.get(name)
    }

    pub fn original(&self) -> Option<&Rendition> {
        self.rendition("original")
    }

    /// Direct link to the full size asset, when the payload carries one.
    pub fn media_url(&self) -> Option<&str> {
        self.original()?.url.as_deref()
    }
}

macro_rules! media_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Media);

        impl $name {
            pub fn into_inner(self) -> Media {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Media;

            fn deref(&self) -> &Media {
                &self.0
            }
        }
    };
}

media_wrapper!(
    /// An animated gif.
    Gif
);
media_wrapper!(
    /// A transparent background animation from the sticker endpoints.
    Sticker
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    #[serde(flatten)]
    pub media: Media,
    pub variation_count: Option<u32>,
    /// Alternate renderings; only filled in by `EmojiClient::get_variations`.
    #[serde(default, skip_deserializing)]
    pub variations: Vec<Emoji>,
}

impl Deref for Emoji {
    type Target = Media;

    fn deref(&self) -> &Media {
        &self.media
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTag {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub tag: Option<String>,
    pub rank: Option<i64>,
}

/// A user or brand channel from channel search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub display_name: Option<String>,
    pub short_display_name: Option<String>,
    pub description: Option<String>,
    pub content_type: Option<String>,
    pub banner_image: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub has_children: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub is_visible: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub is_private: Option<bool>,
    pub user: Option<User>,
    pub featured_gif: Option<Gif>,
    #[serde(default)]
    pub tags: Vec<ChannelTag>,
}

impl Channel {
    /// Display name of the channel, falling back to its owner.
    pub fn name(&self) -> Option<&str> {
        let user = self.user.as_ref();
        self.display_name
            .as_deref()
            .or_else(|| user.and_then(|u| u.display_name.as_deref()))
            .or_else(|| user.and_then(|u| u.username.as_deref()))
    }
}

/// A tag suggestion for a partial query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub analytics_response_payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub name_encoded: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
    pub gif: Option<Gif>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gif_minimal() {
        let gif: Gif = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        assert_eq!(gif.id, "abc");
        assert_eq!(gif.title, None);
        assert_eq!(gif.is_sticker, None);
        assert!(gif.images.is_empty());
        assert_eq!(gif.media_url(), None);
    }

    #[test]
    fn test_gif_requires_id() {
        let res: Result<Gif, _> = serde_json::from_value(json!({ "title": "no id" }));
        assert!(res.is_err());
    }

    #[test]
    fn test_zero_timestamps_are_absent() {
        let gif: Gif = serde_json::from_value(json!({
            "id": "abc",
            "import_datetime": "2016-02-09 17:27:51",
            "trending_datetime": "0000-00-00 00:00:00",
        }))
        .unwrap();
        assert_eq!(gif.import_datetime.as_deref(), Some("2016-02-09 17:27:51"));
        assert_eq!(gif.trending_datetime, None);
    }

    #[test]
    fn test_flags() {
        let gif: Gif =
            serde_json::from_value(json!({ "id": "a", "is_sticker": 1 })).unwrap();
        assert_eq!(gif.is_sticker, Some(true));
        let gif: Gif =
            serde_json::from_value(json!({ "id": "a", "is_sticker": false })).unwrap();
        assert_eq!(gif.is_sticker, Some(false));
        let gif: Gif =
            serde_json::from_value(json!({ "id": "a", "is_sticker": "0" })).unwrap();
        assert_eq!(gif.is_sticker, Some(false));
    }

    #[test]
    fn test_rendition_dimensions() {
        let gif: Gif = serde_json::from_value(json!({
            "id": "a",
            "images": {
                "original": { "url": "https://media.giphy.com/a.gif", "width": "480", "height": "270" },
                "still": { "url": "https://media.giphy.com/a_s.gif" }
            }
        }))
        .unwrap();
        assert_eq!(gif.original().unwrap().dimensions(), Some((480, 270)));
        assert_eq!(gif.rendition("still").unwrap().dimensions(), None);
        assert_eq!(gif.media_url(), Some("https://media.giphy.com/a.gif"));
    }

    #[test]
    fn test_emoji_flatten() {
        let emoji: Emoji = serde_json::from_value(json!({
            "id": "emo",
            "type": "emoji",
            "title": "Smile",
            "variation_count": 3,
            "variations": [{ "id": "ignored" }]
        }))
        .unwrap();
        assert_eq!(emoji.id, "emo");
        assert_eq!(emoji.kind.as_deref(), Some("emoji"));
        assert_eq!(emoji.variation_count, Some(3));
        assert!(emoji.variations.is_empty());
    }

    #[test]
    fn test_channel_name_fallback() {
        let channel: Channel = serde_json::from_value(json!({
            "id": 1234,
            "user": { "username": "nasa", "is_verified": true }
        }))
        .unwrap();
        assert_eq!(channel.id.as_deref(), Some("1234"));
        assert_eq!(channel.name(), Some("nasa"));
        assert_eq!(channel.featured_gif, None);

        let channel: Channel = serde_json::from_value(json!({
            "display_name": "NASA",
            "user": { "username": "nasa" }
        }))
        .unwrap();
        assert_eq!(channel.name(), Some("NASA"));
    }

    #[test]
    fn test_nested_categories() {
        let category: Category = serde_json::from_value(json!({
            "name": "Animals",
            "name_encoded": "animals",
            "subcategories": [{ "name": "cats", "name_encoded": "cats" }],
            "gif": { "id": "xyz" }
        }))
        .unwrap();
        assert_eq!(category.subcategories.len(), 1);
        assert_eq!(category.subcategories[0].name, "cats");
        assert!(category.subcategories[0].subcategories.is_empty());
        assert_eq!(category.gif.unwrap().id, "xyz");
    }
}
