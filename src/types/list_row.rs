use serde::Serialize;

use crate::error::Result;
use crate::feed::{rel, Entry, Envelope, Links};
use crate::xml::{Element, GSX};

/// A row of a worksheet's list feed: column name to value, in the order the
/// service sent the columns.
///
/// Column names are the service's normalised header names (lowercase, no
/// spaces), not the header text as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    id: String,
    title: String,
    fields: Vec<(String, String)>,
    links: Links,
}

impl ListRow {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The service titles each row with its first column's value.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn edit_url(&self) -> Result<&str> {
        self.links.href(rel::EDIT)
    }
}

impl Entry for ListRow {
    fn from_entry(entry: &Element) -> Result<Self> {
        let envelope = Envelope::from_entry(entry)?;

        let fields = entry
            .children()
            .iter()
            .filter(|child| child.namespace() == Some(GSX))
            .map(|child| (child.name().to_owned(), child.text().to_owned()))
            .collect();

        Ok(ListRow {
            id: envelope.id,
            title: envelope.title,
            fields,
            links: envelope.links,
        })
    }

    fn title(&self) -> &str {
        &self.title
    }
}
