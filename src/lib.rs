//! Camp Staffing Workflow and Pay Engine
//!
//! This crate manages seasonal camp staffing: seasons, the monitor interest
//! and approval workflow, team assignments with pay benefits, and itemized
//! pay calculation from a versioned rate table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod store;
pub mod workflow;
