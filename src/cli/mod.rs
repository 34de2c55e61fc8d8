//! CLI command implementations
//!
//! This module contains the implementation of the lifecycle verbs.

pub mod supervise;
