//! Address parts and the builder that assembles them.

pub mod address_parts;
pub mod email_builder;

pub use address_parts::AddressParts;
pub use email_builder::{EmailBuilder, EmailBuilderBuilder};
