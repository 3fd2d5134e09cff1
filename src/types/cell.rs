use derive_more::Display;
use serde::Serialize;

use crate::error::Result;
use crate::feed::{rel, Entry, Envelope, Links};
use crate::xml::{self, Element, GS};

/// One cell from a worksheet's cell feed.
///
/// `row` and `col` are the service's 1-based coordinates. `input_value` is
/// what was typed into the cell (a formula, for computed cells) and `value`
/// is what the service shows for it.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display(fmt = "{}={}", title, value)]
pub struct Cell {
    id: String,
    title: String,
    row: u32,
    col: u32,
    input_value: String,
    value: String,
    numeric_value: Option<f64>,
    links: Links,
}

impl Cell {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The A1-style label.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn numeric_value(&self) -> Option<f64> {
        self.numeric_value
    }

    pub fn is_formula(&self) -> bool {
        self.input_value.starts_with('=')
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn edit_url(&self) -> Result<&str> {
        self.links.href(rel::EDIT)
    }
}

impl Entry for Cell {
    fn from_entry(entry: &Element) -> Result<Self> {
        let envelope = Envelope::from_entry(entry)?;
        let cell = entry.required_child(GS, "cell")?;

        Ok(Cell {
            id: envelope.id,
            title: envelope.title,
            row: xml::parse_number("cell row", cell.required_attribute("row")?)?,
            col: xml::parse_number("cell column", cell.required_attribute("col")?)?,
            input_value: cell.required_attribute("inputValue")?.to_owned(),
            value: cell.text().to_owned(),
            numeric_value: cell
                .attribute("numericValue")
                .map(|n| xml::parse_number("numeric value", n))
                .transpose()?,
            links: envelope.links,
        })
    }

    fn title(&self) -> &str {
        &self.title
    }
}
