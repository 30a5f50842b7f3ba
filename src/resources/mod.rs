//! Prompt resource layout: where templates, configs and outputs live.

pub mod layout;
pub mod paths;
