pub mod handler;

pub use handler::{execute, handle_line, parse_command, Command};
