//! Visual theme for the card.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
