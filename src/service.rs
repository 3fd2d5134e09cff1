//! One call per remote operation: fetch, parse, return.


use log::info;
use quick_xml::escape::escape;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::feed::{Entry, Feed};
use crate::request::{HttpRequest, ServiceRequest};
use crate::types::{Cell, ListRow, Spreadsheet, Worksheet};
use crate::xml::{ATOM, GS};

pub const SPREADSHEETS_FEED: &str = "feeds/spreadsheets/private/full";

pub const DEFAULT_ROW_COUNT: u32 = 100;
pub const DEFAULT_COL_COUNT: u32 = 10;

#[derive(Debug, Clone)]
pub struct SpreadsheetService<R = HttpRequest> {
    request: R,
}

impl SpreadsheetService<HttpRequest> {
    /// A service talking to the default endpoint with `access_token`.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ServiceConfig::new(access_token))
    }

    pub fn with_config(config: ServiceConfig) -> Result<Self> {
        Ok(Self::with_request(HttpRequest::new(config)?))
    }
}

impl<R: ServiceRequest> SpreadsheetService<R> {
    pub fn with_request(request: R) -> Self {
        SpreadsheetService { request }
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    /// Every spreadsheet the token can see.
    pub fn spreadsheets(&self) -> Result<Feed<Spreadsheet>> {
        Feed::parse(&self.request.get(SPREADSHEETS_FEED)?)
    }

    /// Fetches one spreadsheet by its key (see [`Spreadsheet::key`]), saving
    /// a listing when the key is already known.
    pub fn spreadsheet_by_id(&self, id: &str) -> Result<Spreadsheet> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument("spreadsheet id is empty".to_owned()));
        }
        // The id must stay one segment under the spreadsheets feed.
        if id == "." || id == ".." || id.contains(['/', '\\', '?', '#', '%']) {
            return Err(Error::InvalidArgument(format!("invalid spreadsheet id {id:?}")));
        }

        Spreadsheet::parse_entry(&self.request.get(&format!("{SPREADSHEETS_FEED}/{id}"))?)
    }

    pub fn worksheets(&self, spreadsheet: &Spreadsheet) -> Result<Feed<Worksheet>> {
        Feed::parse(&self.request.get(spreadsheet.worksheets_feed_url()?)?)
    }

    /// Creates a worksheet and returns it as the service stored it.
    pub fn add_worksheet(
        &self,
        spreadsheet: &Spreadsheet,
        title: &str,
        rows: u32,
        cols: u32,
    ) -> Result<Worksheet> {
        if title.is_empty() {
            return Err(Error::InvalidArgument("worksheet title is empty".to_owned()));
        }

        let url = spreadsheet.worksheets_feed_url()?;
        info!("adding worksheet {title:?} ({rows}x{cols}) to {}", spreadsheet.title());

        Worksheet::parse_entry(&self.request.post(url, &worksheet_entry(title, rows, cols))?)
    }

    pub fn add_default_worksheet(&self, spreadsheet: &Spreadsheet, title: &str) -> Result<Worksheet> {
        self.add_worksheet(spreadsheet, title, DEFAULT_ROW_COUNT, DEFAULT_COL_COUNT)
    }

    pub fn delete_worksheet(&self, worksheet: &Worksheet) -> Result<()> {
        let url = worksheet.edit_url()?;
        info!("deleting worksheet {:?}", worksheet.title());

        self.request.delete(url)?;
        Ok(())
    }

    pub fn list_feed(&self, worksheet: &Worksheet) -> Result<Feed<ListRow>> {
        Feed::parse(&self.request.get(worksheet.list_feed_url()?)?)
    }

    pub fn cell_feed(&self, worksheet: &Worksheet) -> Result<Feed<Cell>> {
        Feed::parse(&self.request.get(worksheet.cell_feed_url()?)?)
    }

    /// Follows `feed`'s `next` link. `None` once the last page is reached.
    pub fn next_page<T: Entry>(&self, feed: &Feed<T>) -> Result<Option<Feed<T>>> {
        feed.next_url()
            .map(|url| Feed::parse(&self.request.get(url)?))
            .transpose()
    }
}

fn worksheet_entry(title: &str, rows: u32, cols: u32) -> String {
    format!(
        r#"<entry xmlns="{ATOM}" xmlns:gs="{GS}"><title>{}</title><gs:rowCount>{rows}</gs:rowCount><gs:colCount>{cols}</gs:colCount></entry>"#,
        escape(title)
    )
}
