//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the overlay:
//! - Math types and rectangle tests
//! - Logging utilities

pub mod math;
pub mod logging;
