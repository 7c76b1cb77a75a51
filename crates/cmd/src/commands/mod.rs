pub mod build;
pub mod manual;
pub mod render;

pub use build::build_command;
pub use manual::manual_command;
pub use render::{RenderedPage, render_command};
