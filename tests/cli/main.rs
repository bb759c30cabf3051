//! Integration tests for the slor CLI
//!
//! These tests run the slor binary against a temporary store.

mod combine;
mod errors;
mod init;
mod list;
mod logging;
mod support;
