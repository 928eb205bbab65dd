//! Utility functions for email address checking.
//!
//! - [`email_pattern`] - Email address pattern matching and diagnostics
pub mod email_pattern;
