//! Command handlers for each CLI subcommand.

pub mod anchor;
pub mod scenarios;
pub mod shift;
