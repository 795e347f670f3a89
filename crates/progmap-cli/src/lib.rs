//! Library components for the program mapper CLI.

pub mod logging;
pub mod overrides;
