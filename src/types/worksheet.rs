use chrono::{DateTime, FixedOffset};
use derive_more::Display;
use serde::Serialize;

use crate::error::Result;
use crate::feed::{rel, Entry, Envelope, Links};
use crate::xml::{self, Element, GS};

/// One tab of a spreadsheet, as it was when the feed was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display(fmt = "{}", title)]
pub struct Worksheet {
    id: String,
    title: String,
    updated: Option<DateTime<FixedOffset>>,
    row_count: u32,
    col_count: u32,
    links: Links,
}

impl Worksheet {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn updated(&self) -> Option<DateTime<FixedOffset>> {
        self.updated
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn self_url(&self) -> Result<&str> {
        self.links.href(rel::SELF)
    }

    /// The URL deletes and updates go to.
    pub fn edit_url(&self) -> Result<&str> {
        self.links.href(rel::EDIT)
    }

    pub fn list_feed_url(&self) -> Result<&str> {
        self.links.href(rel::LIST_FEED)
    }

    pub fn cell_feed_url(&self) -> Result<&str> {
        self.links.href(rel::CELLS_FEED)
    }
}

impl Entry for Worksheet {
    fn from_entry(entry: &Element) -> Result<Self> {
        let envelope = Envelope::from_entry(entry)?;

        let row_count = xml::parse_number("row count", entry.required_child(GS, "rowCount")?.text())?;
        let col_count = xml::parse_number("column count", entry.required_child(GS, "colCount")?.text())?;

        Ok(Worksheet {
            id: envelope.id,
            title: envelope.title,
            updated: envelope.updated,
            row_count,
            col_count,
            links: envelope.links,
        })
    }

    fn title(&self) -> &str {
        &self.title
    }
}
