use std::fmt;

use time::Month;
use tracing::warn;

/// Full Portuguese month names, accents folded. The abbreviation of each is
/// its first three letters.
const MONTHS: [(&str, Month); 12] = [
    ("janeiro", Month::January),
    ("fevereiro", Month::February),
    ("marco", Month::March),
    ("abril", Month::April),
    ("maio", Month::May),
    ("junho", Month::June),
    ("julho", Month::July),
    ("agosto", Month::August),
    ("setembro", Month::September),
    ("outubro", Month::October),
    ("novembro", Month::November),
    ("dezembro", Month::December),
];

// Any leap year works; the source column carries no year.
const LEAP_YEAR: i32 = 2024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionDate {
    Parsed { month: Month, day: u8 },
    /// Token that did not parse, kept verbatim.
    Raw(String),
}

impl SessionDate {
    pub fn from_token(token: &str) -> Self {
        match parse_session_date(token) {
            Some((month, day)) => SessionDate::Parsed { month, day },
            None => {
                warn!(token, "unrecognized date, keeping it as-is");
                SessionDate::Raw(token.to_string())
            }
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, SessionDate::Parsed { .. })
    }
}

impl fmt::Display for SessionDate {
    /// Parsed dates render as `MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionDate::Parsed { month, day } => write!(f, "{:02}-{:02}", u8::from(*month), day),
            SessionDate::Raw(raw) => f.write_str(raw),
        }
    }
}

pub fn month_from_name(name: &str) -> Option<Month> {
    let folded: String = name
        .trim()
        .trim_end_matches('.')
        .to_lowercase()
        .chars()
        .map(|c| if c == 'ç' { 'c' } else { c })
        .collect();
    if folded.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .find(|(full, _)| *full == folded || full[..3] == folded)
        .map(|(_, m)| *m)
}

/// Parse a `DD/mon` token such as `01/jan` or `7/Fev.`.
pub fn parse_session_date(token: &str) -> Option<(Month, u8)> {
    let (day, month) = token.trim().split_once('/')?;
    let day = day.trim();
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u8 = day.parse().ok()?;
    let month = month_from_name(month)?;
    if day == 0 || day > time::util::days_in_year_month(LEAP_YEAR, month) {
        return None;
    }
    Some((month, day))
}
