pub mod commands;

pub use commands::{Cli, Commands, run, write_story_table};
