#![allow(dead_code)]

use httpmock::MockServer;
use starr::{Radarr, Readarr, StarrClient};
use std::time::Duration;

pub const API_KEY: &str = "mockAPIkey";
pub const NOT_FOUND: &str = r#"{"message": "NotFound"}"#;

pub fn client(server: &MockServer) -> StarrClient {
    StarrClient::new(API_KEY, &server.base_url(), Duration::from_secs(5))
        .expect("mock server URL is valid")
}

pub fn radarr(server: &MockServer) -> Radarr {
    Radarr::new(client(server))
}

pub fn readarr(server: &MockServer) -> Readarr {
    Readarr::new(client(server))
}
