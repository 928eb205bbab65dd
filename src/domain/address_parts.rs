//! The four optional parts an email address is assembled from.

use serde::{Deserialize, Serialize};

/// Raw parts of an email address, as handed to the builder.
///
/// Every field is optional. An empty string and `None` mean the same thing:
/// the part is absent and contributes nothing to the assembled address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParts {
    pub user_name: Option<String>,
    pub domain: Option<String>,
    pub sub_domain: Option<String>,
    pub tld: Option<String>,
}

impl AddressParts {
    /// Returns the part's value if it is set and non-empty.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(AddressParts::present(&Some("co".to_string())), Some("co"));
    /// assert_eq!(AddressParts::present(&Some(String::new())), None);
    /// assert_eq!(AddressParts::present(&None), None);
    /// ```
    pub fn present(part: &Option<String>) -> Option<&str> {
        part.as_deref().filter(|value| !value.is_empty())
    }

    pub fn user_name(&self) -> Option<&str> {
        Self::present(&self.user_name)
    }

    pub fn domain(&self) -> Option<&str> {
        Self::present(&self.domain)
    }

    pub fn sub_domain(&self) -> Option<&str> {
        Self::present(&self.sub_domain)
    }

    pub fn tld(&self) -> Option<&str> {
        Self::present(&self.tld)
    }

    /// Returns whether user name, domain and tld are all present.
    ///
    /// An address missing any of them can never satisfy the address pattern.
    pub fn is_complete(&self) -> bool {
        self.user_name().is_some() && self.domain().is_some() && self.tld().is_some()
    }

    /// Returns whether every part is absent.
    pub fn is_empty(&self) -> bool {
        self.user_name().is_none()
            && self.domain().is_none()
            && self.sub_domain().is_none()
            && self.tld().is_none()
    }
}
