//! Email address pattern matching.
//!
//! An address is accepted when the whole string has the shape
//! `local@label(.sub-label)+`:
//!
//! - **Local part**: 1-256 of `a-z A-Z 0-9 + . _ % -`
//! - **Domain label**: a letter or digit followed by 1-64 of `a-z A-Z 0-9 -`
//! - **Sub-labels**: one or more, each a letter or digit followed by 1-25 of `a-z A-Z 0-9 -`
//!
//! No trimming or case folding happens before matching, and anything outside
//! ASCII is rejected.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::EmailError;

pub const MAX_LOCAL_PART_LEN: usize = 256;
pub const MAX_DOMAIN_LABEL_LEN: usize = 65;
pub const MAX_SUB_LABEL_LEN: usize = 26;
pub const MIN_LABEL_LEN: usize = 2;

/// Compiled address pattern, anchored at both ends.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9+._%\-]{1,256}",
        r"@",
        r"[a-zA-Z0-9][a-zA-Z0-9\-]{1,64}",
        r"(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{1,25})+$",
    ))
    .unwrap()
});

/// Returns whether the candidate matches the address pattern.
///
/// `None` is never valid. Never panics.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_email("nathan@gmail.com"));
/// assert!(!is_valid_email("name@email"));
/// assert!(!is_valid_email(None));
/// ```
pub fn is_valid_email<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    candidate
        .into()
        .is_some_and(|email| EMAIL_REGEX.is_match(email))
}

/// Checks the candidate against the address pattern and explains a rejection.
///
/// Accepts exactly the addresses [`is_valid_email`] accepts. On rejection the
/// first violated rule is reported, scanning left to right.
///
/// # Errors
///
/// Returns the [`EmailError`] describing the first violation.
pub fn validate_email(candidate: &str) -> Result<(), EmailError> {
    if candidate.is_empty() {
        return Err(EmailError::Empty);
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return Err(EmailError::MissingAt);
    };

    validate_local_part(local)?;

    if domain.contains('@') {
        return Err(EmailError::MultipleAt);
    }

    let mut labels = domain.split('.');
    // split always yields at least one item
    let first = labels.next().unwrap_or_default();
    validate_label(first, 0, MAX_DOMAIN_LABEL_LEN)?;

    let mut suffixes = 0;
    for (offset, label) in labels.enumerate() {
        validate_label(label, offset + 1, MAX_SUB_LABEL_LEN)?;
        suffixes += 1;
    }

    if suffixes == 0 {
        return Err(EmailError::MissingDomainSuffix);
    }

    Ok(())
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '_' | '%' | '-')
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn validate_local_part(local: &str) -> Result<(), EmailError> {
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }

    if let Some(ch) = local.chars().find(|&c| !is_local_part_char(c)) {
        return Err(EmailError::InvalidLocalPartChar { ch });
    }

    // ASCII only past this point, so byte length is character count
    if local.len() > MAX_LOCAL_PART_LEN {
        return Err(EmailError::LocalPartTooLong { len: local.len() });
    }

    Ok(())
}

fn validate_label(label: &str, position: usize, max: usize) -> Result<(), EmailError> {
    let mut chars = label.chars();

    let Some(first) = chars.next() else {
        return Err(EmailError::EmptyLabel { position });
    };

    if !first.is_ascii_alphanumeric() {
        return Err(EmailError::InvalidLabelStart {
            position,
            ch: first,
        });
    }

    if let Some(ch) = chars.find(|&c| !is_label_char(c)) {
        return Err(EmailError::InvalidLabelChar { position, ch });
    }

    let len = label.len();
    if len < MIN_LABEL_LEN {
        return Err(EmailError::LabelTooShort { position, len });
    }
    if len > max {
        return Err(EmailError::LabelTooLong { position, len, max });
    }

    Ok(())
}
