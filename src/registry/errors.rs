//! Error types for the operation registry.
//!
//! Every variant here is a programming error: a misspelled operation name, a
//! template that does not match the identifiers passed to it, or a malformed
//! registry file. They surface immediately and are not meant to be handled by
//! normal control flow.

use thiserror::Error;

/// Error type for registry loading and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No operation with this name is registered.
    #[error("Unknown operation '{name}'")]
    UnknownOperation {
        /// The name that was looked up.
        name: String,
    },

    /// A template was resolved with the wrong number of components.
    #[error("Template '{template}' has {expected} placeholder(s) but {actual} component(s) were supplied")]
    TemplateArityMismatch {
        /// The template being resolved.
        template: String,
        /// The number of placeholders in the template.
        expected: usize,
        /// The number of components supplied.
        actual: usize,
    },

    /// A path template is malformed.
    #[error("Invalid path template '{template}': {reason}")]
    InvalidTemplate {
        /// The offending template.
        template: String,
        /// Why the template was rejected.
        reason: String,
    },

    /// The registry document could not be parsed.
    #[error("Failed to parse operation registry: {message}")]
    Parse {
        /// The parser's message.
        message: String,
    },

    /// The process-wide registry was already initialized.
    #[error("The operation registry has already been initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_names_the_operation() {
        let error = RegistryError::UnknownOperation {
            name: "GetNothing".to_string(),
        };
        assert!(error.to_string().contains("GetNothing"));
    }

    #[test]
    fn test_arity_mismatch_reports_both_counts() {
        let error = RegistryError::TemplateArityMismatch {
            template: "customers/{0}".to_string(),
            expected: 1,
            actual: 2,
        };
        let message = error.to_string();
        assert!(message.contains("customers/{0}"));
        assert!(message.contains("1 placeholder"));
        assert!(message.contains("2 component"));
    }
}
