//! Application layer - the render pipeline and the `prompt` command built on it

pub mod dto;
pub mod prompt_command;
pub mod render_prompt;
pub mod traits;

pub use dto::*;
pub use prompt_command::*;
pub use render_prompt::*;
pub use traits::*;
