use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("GET {} failed: {}", path, source))]
    Transport { path: String, source: reqwest::Error },

    #[snafu(display("GET {}: HTTP {}: {}", path, status, message))]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[snafu(display("GET {}: could not decode response: {}", path, source))]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[snafu(display("{} was not found", what))]
    NotFound { what: String },

    #[snafu(display("fetch_many needs at least one id"))]
    EmptyIds,

    #[snafu(display("fetch needs a non-empty id"))]
    EmptyId,

    #[snafu(display("base url \"{}\" cannot carry a path", url))]
    InvalidBaseUrl { url: String },

    #[snafu(display("could not parse url \"{}\": {}", url, source))]
    ParseUrl {
        url: String,
        source: url::ParseError,
    },

    #[snafu(display("could not encode query parameters: {}", source))]
    Encode { source: serde_json::Error },

    #[snafu(display("could not build the HTTP client: {}", source))]
    Client { source: reqwest::Error },

    #[snafu(display("Required env var \"{}\" was not set", name))]
    MissingEnv { name: String },

    #[snafu(display("env var \"{}\" has an invalid value \"{}\"", name, value))]
    InvalidEnv { name: String, value: String },
}

impl Error {
    /// True for the failures that happened before or while talking to the server,
    /// as opposed to a response that could not be understood.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
