pub mod commands;
pub mod common;

pub use commands::{build_command, manual_command, render_command};
pub use common::{SiteContext, write_output};
