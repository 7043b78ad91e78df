pub mod client;
pub mod request;

pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
