//! Share module - the flat key/value form of a plan used in shared links.
//!
//! - **Codec** (`share_codec.rs`) - plan <-> string map, with per-field defaults
//! - **Link** (`share_link.rs`) - full share URLs and social network share targets

mod share_codec;
mod share_link;

#[cfg(test)]
mod share_codec_tests;

pub use share_codec::{
    decode, encode, is_shared_plan, KEY_AVATAR, KEY_LIFE_EXPECTANCY, KEY_MONTHLY_EXPENSE,
    KEY_MONTHLY_SAVINGS, KEY_NAME, KEY_RETIRE_AGE, KEY_SALARY, KEY_START_AGE, PLAN_KEYS,
};
pub use share_link::{SharedPlan, ShareLink, SocialNetwork, KEY_LANG};
