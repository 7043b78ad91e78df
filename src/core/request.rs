use std::fmt;

/// Prefix every *arr API path lives under.
pub const API_PREFIX: &str = "api";

/// One call against an *arr API: a path below `/api`, optional query
/// parameters and an optional, already encoded, JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub uri: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Request for a single item of a resource, `<uri>/<id>`.
    pub fn with_id(uri: &str, id: i64) -> Self {
        Self::new(join_path(uri, &id.to_string()))
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    fn encoded_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.uri)
        } else {
            write!(f, "{}?{}", self.uri, self.encoded_query())
        }
    }
}

/// Joins path segments with exactly one `/` between them.
pub fn join_path(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    if base.is_empty() {
        segment.to_string()
    } else if segment.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, segment)
    }
}

/// `<version>/<resource>`, e.g. `v3/qualityProfile`.
pub fn resource_path(api_version: &str, resource: &str) -> String {
    join_path(api_version, resource)
}
