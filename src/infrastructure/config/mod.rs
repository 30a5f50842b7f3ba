//! Config context loading

pub mod yaml_loader;

pub use yaml_loader::*;
