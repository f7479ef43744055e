//! Roster API Library
//!
//! This library provides the core functionality for the roster API:
//! member and team management plus the aggregate-query engine that
//! answers composition statistics over date periods.

pub mod analytics;
pub mod api;
pub mod domain;
pub mod infrastructure;
