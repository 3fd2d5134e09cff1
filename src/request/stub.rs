use std::cell::RefCell;
use std::collections::VecDeque;

use reqwest::Method;

use super::ServiceRequest;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// A [`ServiceRequest`] that answers from a queue of canned responses and
/// remembers what it was asked. Never touches the network.
#[derive(Debug, Default)]
pub struct StubRequest {
    responses: RefCell<VecDeque<Result<String>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl StubRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.into()));
        self
    }

    /// Queues a failed response, as the HTTP transport would report it.
    pub fn fail(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Err(Error::Request {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn answer(&self, method: Method, url: &str, body: Option<&str>) -> Result<String> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            url: url.to_owned(),
            body: body.map(str::to_owned),
        });

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Request {
                status: 404,
                body: format!("no canned response left for {url}"),
            }))
    }
}

impl ServiceRequest for StubRequest {
    fn get(&self, url: &str) -> Result<String> {
        self.answer(Method::GET, url, None)
    }

    fn post(&self, url: &str, body: &str) -> Result<String> {
        self.answer(Method::POST, url, Some(body))
    }

    fn delete(&self, url: &str) -> Result<String> {
        self.answer(Method::DELETE, url, None)
    }
}
