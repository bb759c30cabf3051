//! Slor Core Library
//!
//! Selection, reconciliation and tag filtering for combined SLO views.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod gateway;
pub mod logging;
pub mod reconcile;
pub mod records;
pub mod selection;
pub mod slo;
pub mod store;
pub mod tags;
