//! This module contains the entity types parsed out of feeds

pub mod cell;
pub mod list_row;
pub mod spreadsheet;
pub mod worksheet;

pub use self::{cell::Cell, list_row::ListRow, spreadsheet::Spreadsheet, worksheet::Worksheet};
