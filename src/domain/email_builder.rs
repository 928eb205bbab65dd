//! Email address assembly from optional parts.
//!
//! [`EmailBuilderBuilder`] collects the parts one at a time and
//! [`EmailBuilder`] is the finished, read-only snapshot that renders them.

use std::fmt;

use crate::domain::address_parts::AddressParts;
use crate::utils::email_pattern::is_valid_email;

/// An immutable set of address parts that renders to a single address string.
///
/// # Examples
///
/// ```ignore
/// let email = EmailBuilder::builder()
///     .user_name("name")
///     .domain("email")
///     .sub_domain("co")
///     .tld("uk")
///     .build();
///
/// assert_eq!(email.email(), "name@email.co.uk");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailBuilder {
    parts: AddressParts,
}

impl EmailBuilder {
    pub fn builder() -> EmailBuilderBuilder {
        EmailBuilderBuilder::new()
    }

    pub fn parts(&self) -> &AddressParts {
        &self.parts
    }

    /// Renders the parts into an address.
    ///
    /// # Rendering Rules
    ///
    /// 1. **User name**: emitted as-is
    /// 2. **Domain**: prefixed with `@`
    /// 3. **Sub-domain**: prefixed with `.` after a domain, otherwise it takes the `@` slot
    /// 4. **TLD**: always prefixed with `.`
    ///
    /// Absent parts (unset or empty) are skipped along with their separator, so
    /// no parts at all yields an empty string and a lone tld yields `".tld"`.
    pub fn email(&self) -> String {
        let parts = &self.parts;
        let mut email = String::new();

        if let Some(user_name) = parts.user_name() {
            email.push_str(user_name);
        }

        let domain = parts.domain();
        if let Some(domain) = domain {
            email.push('@');
            email.push_str(domain);
        }

        if let Some(sub_domain) = parts.sub_domain() {
            email.push(if domain.is_some() { '.' } else { '@' });
            email.push_str(sub_domain);
        }

        if let Some(tld) = parts.tld() {
            email.push('.');
            email.push_str(tld);
        }

        tracing::debug!(email = %email, complete = parts.is_complete(), "Assembled email");

        email
    }

    /// Returns whether the rendered address matches the address pattern.
    pub fn is_valid(&self) -> bool {
        is_valid_email(self.email().as_str())
    }
}

impl fmt::Display for EmailBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email())
    }
}

impl From<AddressParts> for EmailBuilder {
    fn from(parts: AddressParts) -> Self {
        Self { parts }
    }
}

/// Collects address parts before freezing them into an [`EmailBuilder`].
///
/// Setters accept any string, empty included, and never validate. Setting a
/// part twice keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct EmailBuilderBuilder {
    parts: AddressParts,
}

impl EmailBuilderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.parts.user_name = Some(user_name.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.parts.domain = Some(domain.into());
        self
    }

    pub fn sub_domain(mut self, sub_domain: impl Into<String>) -> Self {
        self.parts.sub_domain = Some(sub_domain.into());
        self
    }

    pub fn tld(mut self, tld: impl Into<String>) -> Self {
        self.parts.tld = Some(tld.into());
        self
    }

    /// Replaces all four parts at once, `None`s included.
    pub fn set_parts(mut self, parts: AddressParts) -> Self {
        self.parts = parts;
        self
    }

    pub fn build(self) -> EmailBuilder {
        EmailBuilder { parts: self.parts }
    }
}

impl From<AddressParts> for EmailBuilderBuilder {
    fn from(parts: AddressParts) -> Self {
        Self { parts }
    }
}
