pub mod clock;
pub mod error;
pub mod header;
pub mod http_date;
pub mod options;
pub mod set_cookie;
pub mod text;
pub mod wrapper;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CookieError, Result};
pub use options::CookieOptions;
pub use text::CookieText;
pub use wrapper::CookieWrapper;
