//! Retire-A-Friend Core - retirement projection, shareable plan links and
//! localized result text.
//!
//! Every function in this crate is pure: no I/O, no global state. Locale and
//! theme are passed in by the caller.

pub mod constants;
pub mod errors;
pub mod i18n;
pub mod plan;
pub mod projection;
pub mod share;
pub mod summary;
pub mod theme;

pub use i18n::{format_number, Locale};
pub use plan::PlanInput;
pub use projection::{project, ProjectionResult};
pub use share::{decode, encode, ShareLink, SharedPlan, SocialNetwork};
pub use summary::ResultSummary;
pub use theme::Theme;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::ValidationError;
