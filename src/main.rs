use std::error::Error;

use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use gdata_sheets::config::DEFAULT_SERVICE_URL;
use gdata_sheets::service::{DEFAULT_COL_COUNT, DEFAULT_ROW_COUNT};
use gdata_sheets::{ServiceConfig, SpreadsheetService, Worksheet};

#[derive(Parser, Debug)]
#[command(version, about = "Browse spreadsheets over the Atom feed API")]
struct Cli {
    /// OAuth access token, obtained elsewhere.
    #[arg(long, env = "SHEETS_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    service_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every visible spreadsheet.
    Spreadsheets,
    /// List the worksheets of a spreadsheet.
    Worksheets { key: String },
    /// Dump a worksheet's cell feed.
    Cells { key: String, worksheet: String },
    /// Dump a worksheet's list feed.
    Rows { key: String, worksheet: String },
    AddWorksheet {
        key: String,
        title: String,
        #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
        rows: u32,
        #[arg(long, default_value_t = DEFAULT_COL_COUNT)]
        cols: u32,
    },
    DeleteWorksheet { key: String, worksheet: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("using {}", cli.service_url);

    let service = SpreadsheetService::with_config(
        ServiceConfig::new(cli.token).with_service_url(cli.service_url),
    )?;

    match cli.command {
        Command::Spreadsheets => print(&service.spreadsheets()?)?,
        Command::Worksheets { key } => {
            let spreadsheet = service.spreadsheet_by_id(&key)?;
            print(&service.worksheets(&spreadsheet)?)?
        }
        Command::Cells { key, worksheet } => {
            let worksheet = find_worksheet(&service, &key, &worksheet)?;
            print(&service.cell_feed(&worksheet)?)?
        }
        Command::Rows { key, worksheet } => {
            let worksheet = find_worksheet(&service, &key, &worksheet)?;
            print(&service.list_feed(&worksheet)?)?
        }
        Command::AddWorksheet {
            key,
            title,
            rows,
            cols,
        } => {
            let spreadsheet = service.spreadsheet_by_id(&key)?;
            print(&service.add_worksheet(&spreadsheet, &title, rows, cols)?)?
        }
        Command::DeleteWorksheet { key, worksheet } => {
            let worksheet = find_worksheet(&service, &key, &worksheet)?;
            service.delete_worksheet(&worksheet)?
        }
    }

    Ok(())
}

fn find_worksheet(
    service: &SpreadsheetService,
    key: &str,
    title: &str,
) -> Result<Worksheet, Box<dyn Error>> {
    let spreadsheet = service.spreadsheet_by_id(key)?;
    service
        .worksheets(&spreadsheet)?
        .into_iter()
        .find(|w| w.title() == title)
        .ok_or_else(|| format!("no worksheet titled {title:?} in {}", spreadsheet.title()).into())
}

fn print<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
