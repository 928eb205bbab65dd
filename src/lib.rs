//! # Email Builder
//!
//! Assembles email addresses from their parts and checks strings against a
//! fixed email address pattern.
//!
//! ## Layout
//!
//! - **Domain** ([`domain`]) - Address parts and the builder that renders them
//! - **Utilities** ([`utils`]) - The email address pattern and its diagnostic scanner
//! - **Errors** ([`error`]) - Reasons an address fails the pattern
//! - **CLI** ([`cli`]) - The `email-builder` command-line front end
//!
//! ## Quick Start
//!
//! ```ignore
//! use email_builder::prelude::*;
//!
//! let email = EmailBuilder::builder()
//!     .user_name("name")
//!     .domain("email")
//!     .sub_domain("co")
//!     .tld("uk")
//!     .build();
//!
//! assert_eq!(email.email(), "name@email.co.uk");
//! assert!(is_valid_email(email.email().as_str()));
//! ```
//!
//! ## Configuration
//!
//! The binary reads its logging setup from environment variables via
//! [`config::Config`]. The library itself needs no configuration.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use error::EmailError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{AddressParts, EmailBuilder, EmailBuilderBuilder};
    pub use crate::error::EmailError;
    pub use crate::utils::email_pattern::{is_valid_email, validate_email};
}
