pub const DEFAULT_SERVICE_URL: &str = "https://spreadsheets.google.com/";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything the HTTP transport needs to know, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub access_token: String,
    /// Relative feed paths are resolved against this.
    pub service_url: String,
    pub user_agent: String,
    /// Sent with every request, in order. An `Authorization` header here is
    /// replaced by the one built from `access_token`.
    pub headers: Vec<(String, String)>,
}

impl ServiceConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        ServiceConfig {
            access_token: access_token.into(),
            service_url: DEFAULT_SERVICE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: Vec::new(),
        }
    }

    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
