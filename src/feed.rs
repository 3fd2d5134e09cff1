//! Atom feeds and the envelope shared by every entry kind.

pub mod link;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::Result;
use crate::xml::{self, Element, ATOM, OPENSEARCH};

pub use self::link::{rel, Link, Links};

/// Anything that can be built from a single `<entry>` element.
pub trait Entry: Sized {
    fn from_entry(entry: &Element) -> Result<Self>;

    fn title(&self) -> &str;

    /// Parses a document whose root is a single `<entry>`, as returned when
    /// fetching or creating one resource.
    fn parse_entry(xml: &str) -> Result<Self> {
        Self::from_entry(&Element::parse(xml)?)
    }
}

/// The Atom fields every entry carries.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Envelope {
    pub id: String,
    pub title: String,
    pub updated: Option<DateTime<FixedOffset>>,
    pub links: Links,
}

impl Envelope {
    pub fn from_entry(entry: &Element) -> Result<Self> {
        entry.expect(ATOM, "entry")?;

        Ok(Envelope {
            id: entry.required_child(ATOM, "id")?.text().trim().to_owned(),
            title: entry.required_child(ATOM, "title")?.text().to_owned(),
            updated: entry
                .child(ATOM, "updated")
                .map(|u| xml::parse_timestamp(u.text()))
                .transpose()?,
            links: Links::from_element(entry)?,
        })
    }
}

/// An ordered list of entries of one kind, plus the feed's own metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed<T> {
    id: Option<String>,
    title: Option<String>,
    updated: Option<DateTime<FixedOffset>>,
    total_results: Option<u32>,
    start_index: Option<u32>,
    links: Links,
    entries: Vec<T>,
}

impl<T: Entry> Feed<T> {
    pub fn parse(xml: &str) -> Result<Self> {
        Self::from_element(&Element::parse(xml)?)
    }

    pub fn from_element(feed: &Element) -> Result<Self> {
        feed.expect(ATOM, "feed")?;

        let entries = feed
            .children_named(ATOM, "entry")
            .map(T::from_entry)
            .collect::<Result<Vec<_>>>()?;

        let opensearch = |name: &str| {
            feed.child(OPENSEARCH, name)
                .map(|e| xml::parse_number::<u32>(name, e.text()))
                .transpose()
        };

        Ok(Feed {
            id: feed.child(ATOM, "id").map(|e| e.text().trim().to_owned()),
            title: feed.child(ATOM, "title").map(|e| e.text().to_owned()),
            updated: feed
                .child(ATOM, "updated")
                .map(|u| xml::parse_timestamp(u.text()))
                .transpose()?,
            total_results: opensearch("totalResults")?,
            start_index: opensearch("startIndex")?,
            links: Links::from_element(feed)?,
            entries,
        })
    }

    /// First entry with the given title, in document order.
    pub fn by_title(&self, title: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.title() == title)
    }
}

impl<T> Feed<T> {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn updated(&self) -> Option<DateTime<FixedOffset>> {
        self.updated
    }

    pub fn total_results(&self) -> Option<u32> {
        self.total_results
    }

    pub fn start_index(&self) -> Option<u32> {
        self.start_index
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Where the following page lives, if the service split the feed.
    pub fn next_url(&self) -> Option<&str> {
        self.links.find(rel::NEXT)
    }

    /// Where new entries of this kind are posted.
    pub fn post_url(&self) -> Option<&str> {
        self.links.find(rel::POST)
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> IntoIterator for Feed<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Feed<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
