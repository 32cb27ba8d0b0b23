mod context;
mod flags;
mod output;
mod prompts;
mod report;
mod rule;

pub use context::{Context, Failed};
pub use flags::CliFlags;
