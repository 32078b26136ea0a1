//! Capability invocation errors and classifications.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityErrorKind {
    NotRegistered,
    InvalidArguments,
    Execution,
    Other,
}

/// A structured rejection. Validation failures name the offending argument in
/// `field` so the host can surface exactly what the caller got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityError {
    pub kind: CapabilityErrorKind,
    pub message: String,
    pub field: Option<String>,
    pub capability: Option<String>,
}

impl CapabilityError {
    pub fn new(kind: CapabilityErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            capability: None,
        }
    }

    pub fn not_registered(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::NotRegistered, message)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::InvalidArguments, message)
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::InvalidArguments, message).with_field(field)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::Execution, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::Other, message)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            CapabilityErrorKind::InvalidArguments | CapabilityErrorKind::NotRegistered
        )
    }
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.capability, &self.field) {
            (Some(capability), Some(field)) => write!(
                f,
                "{:?} [capability={}, field={}]: {}",
                self.kind, capability, field, self.message
            ),
            (Some(capability), None) => write!(
                f,
                "{:?} [capability={}]: {}",
                self.kind, capability, self.message
            ),
            (None, Some(field)) => {
                write!(f, "{:?} [field={}]: {}", self.kind, field, self.message)
            }
            _ => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for CapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_helpers_report_user_error() {
        let invalid = CapabilityError::invalid_field("limit", "must be between 1 and 50");
        assert!(invalid.is_user_error());
        assert_eq!(invalid.field.as_deref(), Some("limit"));

        let execution = CapabilityError::execution("boom");
        assert!(!execution.is_user_error());
    }

    #[test]
    fn context_fields_are_included_in_display() {
        let error = CapabilityError::invalid_field("interval", "must be one of 1day, 7day, 30day")
            .with_capability("getTopTweets");

        let rendered = error.to_string();
        assert!(rendered.contains("getTopTweets"));
        assert!(rendered.contains("interval"));
        assert!(rendered.contains("must be one of"));
    }
}
