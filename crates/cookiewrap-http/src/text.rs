use serde_json::Value;

/// Runtime check for "is this a string?" on loosely typed inputs.
///
/// Cookie keys and raw header strings may arrive from untyped callers, so
/// lookups and parsing accept anything implementing this trait and treat a
/// `None` answer as "absent".
pub trait CookieText {
    fn cookie_text(&self) -> Option<&str>;
}

impl CookieText for str {
    fn cookie_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl CookieText for String {
    fn cookie_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CookieText for Value {
    fn cookie_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: CookieText> CookieText for Option<T> {
    fn cookie_text(&self) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.cookie_text())
    }
}

impl<T: CookieText + ?Sized> CookieText for &T {
    fn cookie_text(&self) -> Option<&str> {
        (**self).cookie_text()
    }
}
