//! Visual themes for the result card.

mod theme_model;

pub use theme_model::Theme;
