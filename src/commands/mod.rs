//! CLI commands for slor

pub mod combine;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod list;
pub mod tags;
