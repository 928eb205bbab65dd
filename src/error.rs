//! Reasons an address can fail the address pattern.
//!
//! Labels are numbered from the `@`: position 0 is the domain label, every
//! following position is a dot-separated sub-label.

/// Why [`validate_email`](crate::utils::email_pattern::validate_email) rejected a candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,

    #[error("Email address has no '@' separator")]
    MissingAt,

    #[error("Email address has more than one '@' separator")]
    MultipleAt,

    #[error("Local part is empty")]
    EmptyLocalPart,

    #[error("Local part is too long ({len} characters, max 256)")]
    LocalPartTooLong { len: usize },

    #[error("Local part contains invalid character {ch:?}")]
    InvalidLocalPartChar { ch: char },

    #[error("Domain has no '.'-separated suffix")]
    MissingDomainSuffix,

    #[error("Label {position} is empty")]
    EmptyLabel { position: usize },

    #[error("Label {position} is too short ({len} characters, min 2)")]
    LabelTooShort { position: usize, len: usize },

    #[error("Label {position} is too long ({len} characters, max {max})")]
    LabelTooLong {
        position: usize,
        len: usize,
        max: usize,
    },

    #[error("Label {position} must start with a letter or digit, got {ch:?}")]
    InvalidLabelStart { position: usize, ch: char },

    #[error("Label {position} contains invalid character {ch:?}")]
    InvalidLabelChar { position: usize, ch: char },
}

impl EmailError {
    /// Short machine-readable identifier, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            EmailError::Empty => "empty",
            EmailError::MissingAt => "missing_at",
            EmailError::MultipleAt => "multiple_at",
            EmailError::EmptyLocalPart => "empty_local_part",
            EmailError::LocalPartTooLong { .. } => "local_part_too_long",
            EmailError::InvalidLocalPartChar { .. } => "invalid_local_part_char",
            EmailError::MissingDomainSuffix => "missing_domain_suffix",
            EmailError::EmptyLabel { .. } => "empty_label",
            EmailError::LabelTooShort { .. } => "label_too_short",
            EmailError::LabelTooLong { .. } => "label_too_long",
            EmailError::InvalidLabelStart { .. } => "invalid_label_start",
            EmailError::InvalidLabelChar { .. } => "invalid_label_char",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EmailError::LocalPartTooLong { len: 257 }.to_string(),
            "Local part is too long (257 characters, max 256)"
        );
        assert_eq!(
            EmailError::LabelTooLong {
                position: 1,
                len: 27,
                max: 26
            }
            .to_string(),
            "Label 1 is too long (27 characters, max 26)"
        );
        assert!(
            EmailError::InvalidLocalPartChar { ch: '*' }
                .to_string()
                .contains("'*'")
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EmailError::MissingAt.code(), "missing_at");
        assert_eq!(
            EmailError::InvalidLabelStart { position: 0, ch: '-' }.code(),
            "invalid_label_start"
        );
    }
}
