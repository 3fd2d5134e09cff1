use chrono::{DateTime, FixedOffset};
use derive_more::Display;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::feed::{rel, Entry, Envelope, Links};
use crate::xml::Element;

/// A single spreadsheet as listed in the spreadsheets feed.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display(fmt = "{}", title)]
pub struct Spreadsheet {
    id: String,
    title: String,
    updated: DateTime<FixedOffset>,
    links: Links,
}

impl Spreadsheet {
    /// The full id, which the service hands out as a URL.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last segment of [`Spreadsheet::id`]; this is what
    /// [`crate::SpreadsheetService::spreadsheet_by_id`] expects.
    pub fn key(&self) -> &str {
        let id = self.id.trim_end_matches('/');
        id.rsplit('/').next().unwrap_or(id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn updated(&self) -> DateTime<FixedOffset> {
        self.updated
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn worksheets_feed_url(&self) -> Result<&str> {
        self.links.href(rel::WORKSHEETS_FEED)
    }
}

impl Entry for Spreadsheet {
    fn from_entry(entry: &Element) -> Result<Self> {
        let Envelope {
            id,
            title,
            updated,
            links,
        } = Envelope::from_entry(entry)?;

        let updated = updated
            .ok_or_else(|| Error::parse(format!("spreadsheet {id} has no <updated> element")))?;

        Ok(Spreadsheet {
            id,
            title,
            updated,
            links,
        })
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"
        <entry xmlns="http://www.w3.org/2005/Atom">
            <id>https://spreadsheets.google.com/feeds/spreadsheets/private/full/0Ak1abc</id>
            <updated>2013-08-21T11:09:02.338Z</updated>
            <title type="text">Budget</title>
            <link rel="http://schemas.google.com/spreadsheets/2006#worksheetsfeed"
                  type="application/atom+xml"
                  href="https://spreadsheets.google.com/feeds/worksheets/0Ak1abc/private/full"/>
        </entry>"#;

    #[test]
    fn parses_entry() {
        let sheet = Spreadsheet::parse_entry(ENTRY).unwrap();
        assert_eq!(sheet.title(), "Budget");
        assert_eq!(sheet.key(), "0Ak1abc");
        assert_eq!(sheet.updated().to_rfc3339(), "2013-08-21T11:09:02.338+00:00");
        assert_eq!(
            sheet.worksheets_feed_url().unwrap(),
            "https://spreadsheets.google.com/feeds/worksheets/0Ak1abc/private/full"
        );
        assert_eq!(sheet.to_string(), "Budget");
    }

    #[test]
    fn key_ignores_trailing_slash() {
        let xml = ENTRY.replace("full/0Ak1abc</id>", "full/0Ak1abc/</id>");
        let sheet = Spreadsheet::parse_entry(&xml).unwrap();
        assert_eq!(sheet.key(), "0Ak1abc");
    }

    #[test]
    fn missing_updated_is_a_parse_error() {
        let xml = ENTRY.replace("<updated>2013-08-21T11:09:02.338Z</updated>", "");
        assert!(matches!(Spreadsheet::parse_entry(&xml), Err(Error::Parse(_))));
    }

    #[test]
    fn missing_self_link() {
        let sheet = Spreadsheet::parse_entry(ENTRY).unwrap();
        match sheet.links().href(rel::SELF) {
            Err(Error::LinkNotFound(rel)) => assert_eq!(rel, "self"),
            other => panic!("expected LinkNotFound, got {other:?}"),
        }
    }
}
