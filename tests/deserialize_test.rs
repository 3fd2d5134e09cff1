use gdata_sheets::{Cell, Entry, Error, Feed, ListRow, Spreadsheet, Worksheet};

#[test]
fn parses() {
    assert!(Feed::<Spreadsheet>::parse(include_str!("fixtures/spreadsheets.xml")).is_ok());
    assert!(Feed::<Worksheet>::parse(include_str!("fixtures/worksheets.xml")).is_ok());
    assert!(Feed::<Cell>::parse(include_str!("fixtures/cells.xml")).is_ok());
    assert!(Feed::<ListRow>::parse(include_str!("fixtures/list.xml")).is_ok());
    assert!(Spreadsheet::parse_entry(include_str!("fixtures/spreadsheet.xml")).is_ok());
    assert!(Worksheet::parse_entry(include_str!("fixtures/worksheet.xml")).is_ok());
}

#[test]
fn entry_kinds_do_not_mix() {
    // A spreadsheet entry has no row/column counts.
    let res = Feed::<Worksheet>::parse(include_str!("fixtures/spreadsheets.xml"));
    assert!(matches!(res, Err(Error::Parse(_))));

    // Worksheet entries carry no <gs:cell>.
    let res = Feed::<Cell>::parse(include_str!("fixtures/worksheets.xml"));
    assert!(matches!(res, Err(Error::Parse(_))));
}

#[test]
fn not_xml_at_all() {
    let res = Feed::<Spreadsheet>::parse("<html><body>Service Unavailable</body>");
    assert!(matches!(res, Err(Error::Parse(_))));
}

#[test]
fn serializes_for_display() {
    let sheet = Worksheet::parse_entry(include_str!("fixtures/worksheet.xml")).unwrap();
    let json = serde_json::to_value(&sheet).unwrap();

    assert_eq!(json["title"], "NewSheet");
    assert_eq!(json["row_count"], 50);
    assert_eq!(json["links"][0]["type"], "application/atom+xml");
}
