use std::collections::HashMap;

use indexmap::IndexMap;

use crate::clock::{Clock, SystemClock};
use crate::error::{CookieError, Result};
use crate::header::parse_cookie_header;
use crate::options::CookieOptions;
use crate::set_cookie::{join_directive, set_cookie_attributes};
use crate::text::CookieText;

/// Cookie state for one request/response cycle.
///
/// Seeded from the incoming `Cookie` header, it collects `Set-Cookie`
/// directives and can re-render the combined state as a `Cookie` header.
#[derive(Debug, Clone, Default)]
pub struct CookieWrapper<C = SystemClock> {
    initial: IndexMap<String, String>,
    setups: Vec<(String, String)>,
    set_cookie: Vec<String>,
    clock: C,
}

impl CookieWrapper {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> CookieWrapper<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            initial: IndexMap::new(),
            setups: Vec::new(),
            set_cookie: Vec::new(),
            clock,
        }
    }

    /// Seed the initial cookies from a raw `Cookie` header.
    ///
    /// Anything that is not a string leaves the initial set empty.
    pub fn init_with_string<R: CookieText + ?Sized>(&mut self, raw: &R) {
        self.initial = raw.cookie_text().map(parse_cookie_header).unwrap_or_default();
        tracing::debug!(
            target: "cookiewrap_http",
            cookies = self.initial.len(),
            "initialized from cookie header"
        );
    }

    /// Value of an initial cookie, or `""` when the key is absent or not a string.
    pub fn get<K: CookieText + ?Sized>(&self, key: &K) -> &str {
        let Some(key) = key.cookie_text() else {
            return "";
        };
        self.initial.get(key).map_or("", String::as_str)
    }

    pub fn get_all(&self) -> HashMap<String, String> {
        self.pairs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// Record a new cookie and its `Set-Cookie` directive.
    ///
    /// Accepts typed [`CookieOptions`] or an untyped `serde_json::Value`; the
    /// latter fails with [`CookieError::InvalidArgument`] when `key` or
    /// `value` is not a string. Nothing is recorded on failure.
    pub fn set<O>(&mut self, options: O) -> Result<()>
    where
        O: TryInto<CookieOptions>,
        CookieError: From<O::Error>,
    {
        let options = match options.try_into() {
            Ok(options) => options,
            Err(error) => {
                let error = CookieError::from(error);
                tracing::debug!(
                    target: "cookiewrap_http",
                    error = %error,
                    "rejected cookie options"
                );
                return Err(error);
            }
        };

        let attributes = set_cookie_attributes(&options, &self.clock);
        tracing::debug!(
            target: "cookiewrap_http",
            key = %options.key,
            attributes = attributes.len(),
            "set cookie"
        );

        self.set_cookie.push(join_directive(&options, &attributes));
        self.setups.push((options.key, options.value));
        Ok(())
    }

    /// Formatted `Set-Cookie` values in call order.
    pub fn set_cookie(&self) -> &[String] {
        &self.set_cookie
    }

    /// Initial pairs followed by every set pair, as one `Cookie` header value.
    pub fn get_cookie_string(&self) -> String {
        self.pairs()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    // Initial pairs in header order, then set pairs in call order.
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let initial = self.initial.iter();
        let setups = self.setups.iter().map(|(key, value)| (key, value));
        initial
            .chain(setups)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
