use std::sync::LazyLock;

use regex::Regex;

use crate::models::CallRecord;

const STATION_BANNER: &str = "Station";
const COLUMN_HEADER: &str = "TYP";

// Field order and per-field character sets follow the switch's fixed record layout:
//   type, extension, trunk, dialed digits, DID?, start, S=seconds, cost, account?, '*'?
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<type>[[:word:]]+?)[ \t]+?(?P<extn>[[:word:]]+?)[ \t]+?(?P<trunk>[[:word:]]+?)[ \t]+?",
        r"(?P<dialed>[#0-9-]+?)[ \t]+?(?P<did>[0-9-]+?)?[ \t]+?",
        r"(?P<start>[0-9]{2}:[0-9]{2})[ \t]+?S=(?P<seconds>[0-9]+?)[ \t]+?",
        r"(?P<cost>\$[0-9]{2}\.[0-9]{2})[ \t]*?(?P<account>[0-9]+?)?[ \t]*?(?P<star>\*)?$",
    ))
    .expect("SMDR record pattern is valid")
});

/// Classification of one line of switch output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Blank line, section banner or column header
    Ignored,
    /// Did not satisfy the record grammar
    Malformed,
    Parsed(CallRecord),
}

/// Parse one raw line of SMDR output.
///
/// Pure: performs no I/O and does not log. Callers decide how to report
/// [`ParseOutcome::Malformed`] lines.
///
/// # Examples
///
/// ```
/// use smdr_logger::parsers::{ParseOutcome, parse_line};
///
/// let outcome = parse_line("IN  101  T01  18005551212    09:15  S=125  $00.45  1234  *");
/// let ParseOutcome::Parsed(record) = outcome else { panic!("expected a record") };
/// assert_eq!(record.duration, "0:02:05");
/// assert!(record.star);
///
/// assert_eq!(parse_line("Station 101 is busy"), ParseOutcome::Ignored);
/// assert_eq!(parse_line("garbage data here"), ParseOutcome::Malformed);
/// ```
pub fn parse_line(line: &str) -> ParseOutcome {
    let line = line.trim();
    if line.is_empty() || line.starts_with(STATION_BANNER) || line.starts_with(COLUMN_HEADER) {
        return ParseOutcome::Ignored;
    }

    let Some(caps) = RECORD_RE.captures(line) else {
        return ParseOutcome::Malformed;
    };

    // A seconds count too large for u64 cannot come from a real switch
    let Ok(seconds) = caps["seconds"].parse::<u64>() else {
        return ParseOutcome::Malformed;
    };

    let optional = |name: &str| caps.name(name).map(|m| m.as_str().to_string()).unwrap_or_default();

    ParseOutcome::Parsed(CallRecord {
        call_type: caps["type"].to_string(),
        extension: caps["extn"].to_string(),
        trunk_id: caps["trunk"].to_string(),
        dialed_digits: caps["dialed"].to_string(),
        did: optional("did"),
        start_time: caps["start"].to_string(),
        duration: format_duration(seconds),
        cost: caps["cost"].to_string(),
        account: optional("account"),
        star: caps.name("star").is_some(),
    })
}

/// Render a seconds count as `H:MM:SS`; hours are not wrapped at 24
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
