use crate::config::ProxyConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    /// Pooled client shared by all proxy requests.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
