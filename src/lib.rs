//! A client for the spreadsheet service's Atom feed API.
//!
//! [`SpreadsheetService`] is the entry point: every method is one request
//! followed by parsing the XML response into the entity types in [`types`].
//! Dependent resources are always reached through links carried by the
//! entities themselves, never by building URLs from ids.

pub mod config;
pub mod error;
pub mod feed;
pub mod request;
pub mod service;
pub mod types;
pub mod xml;

pub use crate::config::ServiceConfig;
pub use crate::error::{Error, Result};
pub use crate::feed::{Entry, Feed, Link, Links};
pub use crate::request::{HttpRequest, ServiceRequest, StubRequest};
pub use crate::service::SpreadsheetService;
pub use crate::types::{Cell, ListRow, Spreadsheet, Worksheet};
