//! CLI library components for Quick Data Mapper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod preview;
