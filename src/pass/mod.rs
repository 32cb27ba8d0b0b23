//! Password configuration, rules and generation.

pub mod charset;
mod config;
mod generate;
mod rule;

pub use config::{CharacterClass, Configuration};
pub use generate::{Generator, MAX_REJECTIONS};
pub use rule::Rule;
