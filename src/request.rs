//! Issuing authenticated requests against the feed service.

pub mod stub;
#[cfg(test)]
mod tests;

use log::{debug, trace, warn};
use reqwest::{
    blocking::{Client, Request},
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    redirect::Policy,
    Method, Url,
};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};

pub use self::stub::{RecordedRequest, StubRequest};

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// The three verbs the feed protocol needs. Each returns the raw response
/// body, or [`Error::Request`] when the service answers with 300 or above.
pub trait ServiceRequest {
    fn get(&self, url: &str) -> Result<String>;

    fn post(&self, url: &str, body: &str) -> Result<String>;

    fn delete(&self, url: &str) -> Result<String>;
}

/// [`ServiceRequest`] over a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    client: Client,
    service_url: Url,
    headers: HeaderMap,
}

impl HttpRequest {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut service_url = config.service_url;
        if !service_url.ends_with('/') {
            service_url.push('/');
        }
        let service_url = Url::parse(&service_url)
            .map_err(|e| Error::InvalidArgument(format!("service url {service_url:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidArgument(format!("invalid header name {name:?}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidArgument(format!("invalid value for header {name}")))?;
            headers.append(name, value);
        }

        let mut auth = HeaderValue::from_str(&format!("OAuth {}", config.access_token))
            .map_err(|_| Error::InvalidArgument("access token is not a valid header value".to_owned()))?;
        auth.set_sensitive(true);
        // `insert` drops any caller-supplied Authorization.
        headers.insert(AUTHORIZATION, auth);

        // 3xx answers are failures, not hops.
        let client = Client::builder()
            .user_agent(config.user_agent)
            .redirect(Policy::none())
            .build()?;

        Ok(HttpRequest {
            client,
            service_url,
            headers,
        })
    }

    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Absolute URLs (as found in feed links) are used verbatim, anything else
    /// is taken relative to the service URL.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        let resolved = if url.starts_with("http://") || url.starts_with("https://") {
            Url::parse(url)
        } else {
            self.service_url.join(url)
        };
        resolved.map_err(|e| Error::InvalidArgument(format!("url {url:?}: {e}")))
    }

    /// Builds the request without sending it.
    pub fn prepare(&self, method: Method, url: &str, body: Option<&str>) -> Result<Request> {
        let url = self.resolve(url)?;

        let mut headers = self.headers.clone();
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ATOM_CONTENT_TYPE));
            builder = builder.body(body.to_owned());
        }

        Ok(builder.headers(headers).build()?)
    }

    fn execute(&self, request: Request) -> Result<String> {
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request)?;
        let status = response.status().as_u16();
        let body = response.text()?;

        check_status(status, body)
    }
}

pub(crate) fn check_status(status: u16, body: String) -> Result<String> {
    if status > 299 {
        warn!("spreadsheet service answered {status}");
        return Err(Error::Request { status, body });
    }

    trace!("{status} with {} bytes", body.len());
    Ok(body)
}

impl ServiceRequest for HttpRequest {
    fn get(&self, url: &str) -> Result<String> {
        self.execute(self.prepare(Method::GET, url, None)?)
    }

    fn post(&self, url: &str, body: &str) -> Result<String> {
        self.execute(self.prepare(Method::POST, url, Some(body))?)
    }

    fn delete(&self, url: &str) -> Result<String> {
        self.execute(self.prepare(Method::DELETE, url, None)?)
    }
}
