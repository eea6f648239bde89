use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{list, parse, truncate, Api};
use crate::error::{EmptyIdSnafu, EmptyIdsSnafu, Result};
use crate::models::{Category, Channel, Gif, Term};
use crate::params::{
    join_ids, FetchOptions, Page, Phrase, Query, RandomOptions, SearchOptions, TranslateOptions,
    TrendingOptions,
};

const GIFS: &str = "gifs";

#[derive(Serialize)]
struct Ids<'a> {
    ids: String,
    #[serde(flatten)]
    options: &'a FetchOptions,
}

#[derive(Deserialize)]
struct RandomId {
    random_id: String,
}

/// The gif endpoints, plus the tag, channel and category lookups that live
/// next to them.
#[derive(Debug, Clone)]
pub struct GifClient {
    api: Api,
}

impl GifClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api(Api::new(api_key)?))
    }

    pub fn with_api(api: Api) -> Self {
        GifClient { api }
    }

    /// Most relevant gifs right now, in the order the server ranks them.
    pub fn trending(&self, options: &TrendingOptions) -> Result<Vec<Gif>> {
        let mut gifs: Vec<Gif> = self.api.get(&["v1", GIFS, "trending"], options)?;
        truncate(&mut gifs, options.limit);
        Ok(gifs)
    }

    pub fn search(&self, q: &str, options: &SearchOptions) -> Result<Vec<Gif>> {
        let mut gifs: Vec<Gif> = self
            .api
            .get(&["v1", GIFS, "search"], &Query { q, options })?;
        truncate(&mut gifs, options.limit);
        Ok(gifs)
    }

    /// The single gif that best illustrates `phrase`.
    pub fn translate(&self, phrase: &str, options: &TranslateOptions) -> Result<Gif> {
        let params = Phrase { s: phrase, options };
        self.api
            .get_one(&["v1", GIFS, "translate"], &params, &format!("translation of {:?}", phrase))
    }

    pub fn random(&self, options: &RandomOptions) -> Result<Gif> {
        let what = match &options.tag {
            Some(tag) => format!("random gif tagged {:?}", tag),
            None => "random gif".to_string(),
        };
        self.api.get_one(&["v1", GIFS, "random"], options, &what)
    }

    /// Fails with `Error::NotFound` when no gif has this id.
    pub fn fetch(&self, id: &str, options: &FetchOptions) -> Result<Gif> {
        if id.trim().is_empty() {
            return EmptyIdSnafu.fail();
        }
        self.api
            .get_one(&["v1", GIFS, id], options, &format!("gif {}", id))
    }

    /// Gifs for every id the server can resolve, in the server's order.
    pub fn fetch_many<S: AsRef<str>>(&self, ids: &[S], options: &FetchOptions) -> Result<Vec<Gif>> {
        if ids.is_empty() {
            return EmptyIdsSnafu.fail();
        }
        let params = Ids {
            ids: join_ids(ids),
            options,
        };
        self.api.request(&["v1", GIFS], &params, list)
    }

    /// Currently trending search terms, as the server sends them.
    pub fn fetch_searches(&self) -> Result<Vec<Value>> {
        self.api.request(&["v1", "trending", "searches"], &(), list)
    }

    /// Tags related to `term`, most relevant first.
    pub fn fetch_related_terms(&self, term: &str) -> Result<Vec<Term>> {
        self.api.request(&["v1", "tags", "related", term], &(), terms)
    }

    /// The tag most closely related to `term`, if the server knows any.
    pub fn fetch_relate_search(&self, term: &str) -> Result<Option<String>> {
        let related = self.fetch_related_terms(term)?;
        Ok(related.into_iter().next().map(|t| t.name))
    }

    /// Channels matching `q`; empty when nothing matches.
    pub fn fetch_channels(&self, q: &str, page: &Page) -> Result<Vec<Channel>> {
        self.api.request(
            &["v1", "channels", "search"],
            &Query { q, options: page },
            list,
        )
    }

    pub fn fetch_tag_autocomplete(&self, q: &str, page: &Page) -> Result<Vec<Term>> {
        self.api.request(
            &["v1", GIFS, "search", "tags"],
            &Query { q, options: page },
            terms,
        )
    }

    pub fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.api.request(&["v1", GIFS, "categories"], &(), list)
    }

    /// A fresh id to pass as `random_id` so the server can personalise results.
    pub fn random_id(&self) -> Result<String> {
        let id: RandomId = self.api.get(&["v1", "randomid"], &())?;
        Ok(id.random_id)
    }
}

/// Term endpoints answer with either a list or a lone object.
fn terms(data: Value) -> Result<Vec<Term>> {
    let single = matches!(&data, Value::Object(map) if !map.is_empty());
    if single {
        return parse(data).map(|term| vec![term]);
    }
    list(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_shapes() {
        let many = terms(json!([{ "name": "cat" }, { "name": "kitten" }])).unwrap();
        assert_eq!(many.len(), 2);

        let one = terms(json!({ "name": "cat" })).unwrap();
        assert_eq!(one[0].name, "cat");

        assert!(terms(json!(null)).unwrap().is_empty());
        assert!(terms(json!({})).unwrap().is_empty());
    }
}
