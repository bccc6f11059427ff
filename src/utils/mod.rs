pub mod environment;
pub mod terminal;

pub use environment::{APP_DIR_NAME, get_state_dir};
pub use terminal::{sanitize_display, truncate_chars};
