//! Subcommand implementations.

pub mod destiny;
pub mod faces;
pub mod roll;
