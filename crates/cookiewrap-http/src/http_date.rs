//! HTTP date formatting for `Expires` attributes.
//!
//! Only the RFC 7231 IMF-fixdate form is produced:
//! `Sun, 06 Nov 1994 08:49:37 GMT`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{CookieError, Result};

pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a UTC instant as an IMF-fixdate. Sub-second precision is dropped.
pub fn fmt_http_date(time: &DateTime<Utc>) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an IMF-fixdate back into a UTC instant.
pub fn parse_http_date(date_str: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(date_str, HTTP_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| CookieError::InvalidDate(date_str.to_string()))
}
