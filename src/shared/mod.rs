//! Shared components - common errors and display-figure utilities

pub mod errors;
pub mod utils;
