use std::time::Duration;

/// Connection settings for one *arr instance.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout(&self) -> Duration;

    fn http_user(&self) -> Option<&str> {
        None
    }

    fn http_pass(&self) -> Option<&str> {
        None
    }

    fn verify_ssl(&self) -> bool {
        true
    }
}
