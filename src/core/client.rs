use crate::core::request::{join_path, Request, API_PREFIX};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StarrError};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const APP_USER_AGENT: &str = concat!("starr-rs/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "X-Api-Key";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP helper used by every resource module. It owns the connection
/// settings of one *arr instance and turns a [`Request`] into a checked,
/// decoded response.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct StarrClient {
    http: Client,
    base_url: Url,
    api_key: String,
    basic_auth: Option<(String, String)>,
}

impl StarrClient {
    /// Client for the instance at `url` using `api_key`. A zero `timeout`
    /// disables the per-request timeout.
    pub fn new(api_key: &str, url: &str, timeout: Duration) -> Result<Self> {
        Self::build(api_key, url, timeout, None, true)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let basic_auth = config
            .http_user()
            .map(|user| (user.to_string(), config.http_pass().unwrap_or_default().to_string()));

        Self::build(
            config.api_key(),
            config.base_url(),
            config.timeout(),
            basic_auth,
            config.verify_ssl(),
        )
    }

    fn build(
        api_key: &str,
        url: &str,
        timeout: Duration,
        basic_auth: Option<(String, String)>,
        verify_ssl: bool,
    ) -> Result<Self> {
        let base_url = Url::parse(url)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!verify_ssl);
        if !timeout.is_zero() {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let http = builder.build().map_err(StarrError::ClientBuild)?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
            basic_auth,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a request: `<base>/api/<uri>?<query>`.
    pub fn url_for(&self, req: &Request) -> Url {
        let mut url = self.base_url.clone();
        let path = join_path(&join_path(self.base_url.path(), API_PREFIX), &req.uri);
        url.set_path(&format!("/{}", path.trim_start_matches('/')));
        url.set_query(None);
        if !req.query.is_empty() {
            url.query_pairs_mut().extend_pairs(req.query.iter());
        }
        url
    }

    async fn execute(&self, method: Method, req: &Request) -> Result<Vec<u8>> {
        let url = self.url_for(req);
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some((user, pass)) = &self.basic_auth {
            builder = builder.basic_auth(user, Some(pass));
        }
        if let Some(body) = &req.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let transport = |source: reqwest::Error| StarrError::Transport {
            method: method.clone(),
            request: req.to_string(),
            source,
        };
        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, req, status, body.len());

        if !status.is_success() {
            tracing::warn!("{} {} returned invalid status {}", method, req, status);
            return Err(StarrError::InvalidStatusCode {
                method,
                request: req.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    async fn execute_into<T: DeserializeOwned>(&self, method: Method, req: &Request) -> Result<T> {
        let body = self.execute(method.clone(), req).await?;
        serde_json::from_slice(&body).map_err(|source| StarrError::Decode {
            method,
            request: req.to_string(),
            source,
        })
    }

    pub async fn get_into<T: DeserializeOwned>(&self, req: &Request) -> Result<T> {
        self.execute_into(Method::GET, req).await
    }

    pub async fn post_into<T: DeserializeOwned>(&self, req: &Request) -> Result<T> {
        self.execute_into(Method::POST, req).await
    }

    pub async fn put_into<T: DeserializeOwned>(&self, req: &Request) -> Result<T> {
        self.execute_into(Method::PUT, req).await
    }

    /// PUT whose response body is not needed.
    pub async fn put_any(&self, req: &Request) -> Result<()> {
        self.execute(Method::PUT, req).await.map(|_| ())
    }

    pub async fn delete_any(&self, req: &Request) -> Result<()> {
        self.execute(Method::DELETE, req).await.map(|_| ())
    }
}

/// JSON-encodes a request body, tagging failures with the target path.
pub fn encode_body<T: Serialize + ?Sized>(uri: &str, value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|source| StarrError::Encode {
        request: uri.to_string(),
        source,
    })
}
