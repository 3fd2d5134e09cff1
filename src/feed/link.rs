use derive_more::Deref;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::xml::{Element, ATOM};

/// Link relations the service uses.
pub mod rel {
    pub const SELF: &str = "self";
    pub const EDIT: &str = "edit";
    pub const NEXT: &str = "next";
    pub const POST: &str = "http://schemas.google.com/g/2005#post";
    pub const WORKSHEETS_FEED: &str = "http://schemas.google.com/spreadsheets/2006#worksheetsfeed";
    pub const LIST_FEED: &str = "http://schemas.google.com/spreadsheets/2006#listfeed";
    pub const CELLS_FEED: &str = "http://schemas.google.com/spreadsheets/2006#cellsfeed";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// The `<link>` children of a feed or entry, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref)]
pub struct Links(Vec<Link>);

impl Links {
    pub(crate) fn from_element(parent: &Element) -> Result<Self> {
        parent
            .children_named(ATOM, "link")
            .map(|link| -> Result<Link> {
                Ok(Link {
                    // Atom's default relation.
                    rel: link.attribute("rel").unwrap_or("alternate").to_owned(),
                    href: link.required_attribute("href")?.to_owned(),
                    kind: link.attribute("type").map(str::to_owned),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Links)
    }

    pub fn find(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|l| l.rel == rel)
            .map(|l| l.href.as_str())
    }

    /// Like [`Links::find`], but a missing relation is an error.
    pub fn href(&self, rel: &str) -> Result<&str> {
        self.find(rel)
            .ok_or_else(|| Error::LinkNotFound(rel.to_owned()))
    }
}
