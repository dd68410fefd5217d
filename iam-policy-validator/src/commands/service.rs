//! IAM Policy Validator Service Layer
//!
//! This module provides the service interface that adapters (the CLI today)
//! use to check policies. The service holds a configured validator and composes
//! loading, validation and wildcard scanning.

use crate::validation::{PolicyValidator, ValidatorConfig};

/// Main service struct that holds the validator and provides check operations
#[derive(Debug, Clone, Default)]
pub struct IamPolicyValidatorService {
    pub(crate) validator: PolicyValidator,
}

impl IamPolicyValidatorService {
    /// Create a new service instance with the default `aws` rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service instance with custom validator limits
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validator: PolicyValidator::with_config(config),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        self.validator.config()
    }

    // check_document() and check_file() are implemented in check.rs
}
