use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::Clock;
use crate::http_date::fmt_http_date;
use crate::options::CookieOptions;

/// Render one `Set-Cookie` header value.
///
/// Attributes follow `key=value` in a fixed order: `Max-Age`, `Expires`,
/// `Path`, `Domain`, `Secure`, `HttpOnly`. When `Max-Age` is set without an
/// explicit expiry, `Expires` is derived from the clock.
pub fn format_set_cookie<C: Clock + ?Sized>(options: &CookieOptions, clock: &C) -> String {
    join_directive(options, &set_cookie_attributes(options, clock))
}

/// The attributes of a directive, each already rendered (`Max-Age=100`, `Secure`).
pub fn set_cookie_attributes<C: Clock + ?Sized>(
    options: &CookieOptions,
    clock: &C,
) -> Vec<String> {
    let mut attributes = Vec::new();

    if let Some(max_age) = options.max_age {
        attributes.push(format!("Max-Age={max_age}"));
    }

    if let Some(expires) = effective_expiry(options, clock) {
        attributes.push(format!("Expires={}", fmt_http_date(&expires)));
    }

    if let Some(path) = &options.path {
        attributes.push(format!("Path={path}"));
    }

    if let Some(domain) = &options.domain {
        attributes.push(format!("Domain={domain}"));
    }

    if options.secure {
        attributes.push("Secure".to_string());
    }

    if options.http_only {
        attributes.push("HttpOnly".to_string());
    }

    attributes
}

/// Prefix rendered attributes with `key=value`, separated by `; `.
pub fn join_directive(options: &CookieOptions, attributes: &[String]) -> String {
    let mut header = format!("{}={}", options.key, options.value);
    for attribute in attributes {
        header.push_str("; ");
        header.push_str(attribute);
    }
    header
}

// The clock is read only when the expiry has to be derived.
fn effective_expiry<C: Clock + ?Sized>(
    options: &CookieOptions,
    clock: &C,
) -> Option<DateTime<Utc>> {
    if options.expires.is_some() {
        return options.expires;
    }

    let max_age = options.max_age?;
    // Out-of-range lifetimes drop the attribute instead of panicking.
    TimeDelta::try_seconds(max_age).and_then(|delta| clock.now().checked_add_signed(delta))
}
