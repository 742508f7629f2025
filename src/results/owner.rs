//! Patent owner extraction
//!
//! The provider's `author` field on patent pages is unstructured: sometimes it
//! names the assignee, sometimes it carries a filing or publication date.
//! [`patent_owner`] keeps the former and drops the latter. The classifier is
//! approximate. Strings it cannot confidently call a date are kept as owners,
//! so `"2020 Annual Report"` is an owner while `"2020/01/02"` is not.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}[-/]").unwrap());

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.? \d{1,2},? \d{4}",
    )
    .unwrap()
});

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

static MONTH_ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b").unwrap());

static ALPHA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").unwrap());

/// Day-first and month-first layouts accepted as calendar dates
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%Y %b %d",
];

/// Owner named by a patent's author field, or `None` if the field is empty
/// or holds a date.
pub fn patent_owner(author: Option<&str>) -> Option<String> {
    let trimmed = author?.trim();
    if trimmed.is_empty() || looks_like_date(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Whether a trimmed string reads as a date rather than a name.
pub fn looks_like_date(s: &str) -> bool {
    if YEAR_PREFIX.is_match(s) || MONTH_DAY_YEAR.is_match(s) {
        return true;
    }

    parses_as_date(s)
        && FOUR_DIGITS.is_match(s)
        && !ALPHA_RUN.is_match(&MONTH_ABBREVIATION.replace_all(s, ""))
}

fn parses_as_date(s: &str) -> bool {
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    if DATE_LAYOUTS
        .iter()
        .any(|layout| NaiveDate::parse_from_str(s, layout).is_ok())
    {
        return true;
    }
    // month and year only, e.g. "Mar 2020"
    NaiveDate::parse_from_str(&format!("1 {s}"), "%d %b %Y").is_ok()
}
