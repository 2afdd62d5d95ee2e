pub mod client;
pub mod types;

pub use client::{ProxyClient, DEFAULT_TIMEOUT};
pub use types::*;
