//! Input file readers

pub mod filesystem_reader;

pub use filesystem_reader::*;
