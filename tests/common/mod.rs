#![allow(dead_code)]

use giphy_client::{Api, Giphy, RawResponse, Result, Transport};
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex};
use url::Url;

pub const BASE_URL: &str = "http://giphy.test/";
pub const API_KEY: &str = "test-key";

/// Serves canned bodies by request path and remembers every URL it was asked for.
#[derive(Default)]
pub struct Recorder {
    routes: HashMap<String, (u16, String)>,
    seen: Mutex<Vec<Url>>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn ok(self, path: &str, body: impl Into<String>) -> Self {
        self.route(path, 200, body)
    }

    pub fn requests(&self) -> Vec<Url> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Url {
        self.requests().pop().expect("no request was made")
    }

    /// Query parameters of the most recent request.
    pub fn query(&self) -> HashMap<String, String> {
        self.last().query_pairs().into_owned().collect()
    }
}

impl Transport for Recorder {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        self.seen.lock().unwrap().push(url.clone());
        let (status, body) = self.routes.get(url.path()).cloned().unwrap_or_else(|| {
            (
                404,
                r#"{"data": [], "meta": {"status": 404, "msg": "Not Found"}}"#.to_string(),
            )
        });
        Ok(RawResponse { status, body })
    }
}

pub fn stub_giphy(recorder: Recorder) -> (Giphy, Arc<Recorder>) {
    let recorder = Arc::new(recorder);
    let api = Api::with_transport(API_KEY, BASE_URL, recorder.clone()).unwrap();
    (Giphy::with_api(api), recorder)
}

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path, e))
}
