//! Headers and row renderers for each log format
//!
//! Files are append-only, so the HTML headers open a `<table>` that is never
//! closed. Browsers render the trailing rows regardless.

use std::borrow::Cow;

use super::period::PeriodKey;
use crate::models::{CallDirection, CallRecord};

const INCOMING_ICON: &str = "../../resources/icons/incoming.png";
const OUTGOING_ICON: &str = "../../resources/icons/outgoing.png";

const CSV_COLUMNS: &str =
    "Date, Type, Extension, Digits Dialed, DID Number, Start Time, Duration, Account Code";

const DAILY_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>SMDR Call Log - {date}</title>
</head>
<body>
<h1>Call Log for {date}</h1>
<p><a href="index.html">All logs</a></p>
<table border="1" cellpadding="4">
<tr><th></th><th>Type</th><th>Extension</th><th>Digits Dialed</th><th>DID Number</th><th>Start Time</th><th>Duration</th><th>Account Code</th></tr>
"#;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>SMDR Call Logs</title>
</head>
<body>
<h1>SMDR Call Logs</h1>
<table border="1" cellpadding="4">
<tr><th>Date</th><th>Web View</th><th>Daily Log</th><th>Monthly Log</th></tr>
"#;

/// Escape text for an HTML text node
fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

pub fn daily_html_header(key: &PeriodKey) -> String {
    DAILY_HTML_TEMPLATE.replace("{date}", &key.html_title_date())
}

pub fn daily_csv_header(key: &PeriodKey) -> String {
    format!("SMDR Logger Date, {}\n{}\n", key.long_date(), CSV_COLUMNS)
}

pub fn monthly_csv_header(key: &PeriodKey) -> String {
    format!("SMDR Logger Date, {}\n{}\n", key.long_month(), CSV_COLUMNS)
}

pub fn index_header() -> String {
    INDEX_TEMPLATE.to_string()
}

pub fn html_row(record: &CallRecord) -> String {
    let icon = match record.direction() {
        CallDirection::Incoming => format!("<td><img src=\"{}\"></td>", INCOMING_ICON),
        CallDirection::Outgoing => format!("<td><img src=\"{}\"></td>", OUTGOING_ICON),
        CallDirection::Unknown => "<td></td>".to_string(),
    };

    let mut row = String::from("<tr>\n");
    row.push_str(&icon);
    for field in [
        &record.call_type,
        &record.extension,
        &record.dialed_digits,
        &record.did,
        &record.start_time,
        &record.duration,
        &record.account,
    ] {
        row.push_str(&format!("<td>{}</td>\n", escape_html(field)));
    }
    row.push_str("</tr>\n");
    row
}

/// One CSV row; the date column is the logging date, not the call's start date
pub fn csv_row(record: &CallRecord, key: &PeriodKey) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}, {}, {}\n",
        key.daily,
        record.call_type,
        record.extension,
        record.dialed_digits,
        record.did,
        record.start_time,
        record.duration,
        record.account
    )
}

pub fn index_row(key: &PeriodKey) -> String {
    format!(
        "<tr><td><a href=\"smdr-{day}.html\">{label}</a></td>\
         <td><a href=\"smdr-{day}.html\">View</a></td>\
         <td><a href=\"../csv/daily/smdr-{day}.csv\">CSV/Excel</a></td>\
         <td><a href=\"../csv/monthly/smdr-{month}.csv\">CSV/Excel</a></td></tr>\n",
        day = key.daily,
        label = key.index_label(),
        month = key.monthly,
    )
}

/// Marker that identifies the index row of a given day
pub fn index_row_marker(key: &PeriodKey) -> String {
    format!("<td><a href=\"smdr-{}.html\">", key.daily)
}
