//! Rendering domain module - the pieces a prompt is rendered from
//!
//! Holds the template context, the pipeline error type and the ports that
//! concrete file and template-engine adapters implement.

pub mod context;
pub mod errors;
pub mod traits;

pub use context::*;
pub use errors::*;
pub use traits::*;
