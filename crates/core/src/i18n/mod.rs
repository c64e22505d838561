//! Locale handling: the supported languages, digit grouping and the typed
//! translation catalog.

mod locale;
mod messages;
mod number_format;

pub use locale::{Locale, LOCALE_EN, LOCALE_TH};
pub use messages::{render, translate, validation_message, MessageKey};
pub use number_format::{format_amount, format_number};
