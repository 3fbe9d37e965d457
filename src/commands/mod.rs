//! CLI command implementations

pub mod check;
pub mod clean;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod paths;
pub mod show;
