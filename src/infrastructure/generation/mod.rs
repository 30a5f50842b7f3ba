//! Template engine implementations

pub mod template_renderer;

pub use template_renderer::{CompiledTemplate, TeraTemplateEngine};
