//! Infrastructure layer - concrete implementations of domain ports

pub mod config;
pub mod generation;
pub mod input;
pub mod output;
