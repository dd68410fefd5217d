//! Rule-by-rule validation of a deserialized policy
//!
//! Rules run in a fixed order and the first violation is returned, so a given
//! malformed document always produces the same error.

use log::{debug, trace};
use serde_json::Value;

use super::config::ValidatorConfig;
use super::name::{is_policy_name_length_valid, matches_policy_name_pattern};
use super::{ValidationError, ValidationResult};
use crate::types::{fields, Effect, WILDCARD_RESOURCE};

/// Validates policy documents against a [`ValidatorConfig`].
#[derive(Debug, Clone)]
pub struct PolicyValidator {
    config: ValidatorConfig,
    partition_marker: String,
}

impl PolicyValidator {
    /// Create a validator with the default `aws` rules
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with custom limits
    pub fn with_config(config: ValidatorConfig) -> Self {
        let partition_marker = config.partition_marker();
        Self {
            config,
            partition_marker,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check `policy` against every structural rule.
    ///
    /// `policy` may be any JSON value; missing or wrong-typed fields are reported
    /// as validation errors, never as panics.
    pub fn validate(&self, policy: &Value) -> ValidationResult<()> {
        let document = policy
            .get(fields::POLICY_DOCUMENT)
            .filter(|document| document.is_object())
            .ok_or(ValidationError::MissingPolicyDocument)?;

        let name = policy
            .get(fields::POLICY_NAME)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingPolicyName)?;

        if !matches_policy_name_pattern(name) {
            return Err(ValidationError::InvalidPolicyNamePattern);
        }

        // Unreachable for empty names, which fail above; kept so the length rule
        // stands on its own if the emptiness check ever changes.
        if !is_policy_name_length_valid(name, self.config.max_name_length) {
            return Err(ValidationError::PolicyNameLength {
                max: self.config.max_name_length,
            });
        }

        match document.get(fields::VERSION).and_then(Value::as_str) {
            Some(version) if version == self.config.supported_version => {}
            _ => {
                return Err(ValidationError::InvalidVersion {
                    expected: self.config.supported_version.clone(),
                })
            }
        }

        let statements = document
            .get(fields::STATEMENT)
            .and_then(Value::as_array)
            .filter(|statements| !statements.is_empty())
            .ok_or(ValidationError::MissingStatements)?;

        for (index, statement) in statements.iter().enumerate() {
            self.validate_statement(index, statement)?;
        }

        debug!(
            "Policy '{}' passed validation ({} statements)",
            name,
            statements.len()
        );
        Ok(())
    }

    fn validate_statement(&self, index: usize, statement: &Value) -> ValidationResult<()> {
        statement
            .get(fields::EFFECT)
            .and_then(Value::as_str)
            .and_then(Effect::parse)
            .ok_or(ValidationError::InvalidEffect { index })?;

        statement
            .get(fields::ACTION)
            .and_then(Value::as_array)
            .filter(|actions| !actions.is_empty())
            .ok_or(ValidationError::MissingActions { index })?;

        let resource = statement.get(fields::RESOURCE).and_then(Value::as_str);

        // Surrounding whitespace is ignored here only; scoped resources are
        // checked as written.
        if resource.map(str::trim) == Some(WILDCARD_RESOURCE) {
            trace!("Statement {} uses the wildcard resource", index);
            return Ok(());
        }

        let resource = resource
            .filter(|resource| !resource.is_empty())
            .ok_or(ValidationError::InvalidResource { index })?;

        if !resource.contains(&self.partition_marker) {
            return Err(ValidationError::MissingPartition {
                index,
                partition: self.config.partition.clone(),
            });
        }

        if resource.chars().count() > self.config.max_resource_length {
            return Err(ValidationError::ResourceTooLong {
                index,
                max: self.config.max_resource_length,
            });
        }

        Ok(())
    }
}

impl Default for PolicyValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `policy` with the default rules.
pub fn validate_iam_policy(policy: &Value) -> ValidationResult<()> {
    PolicyValidator::new().validate(policy)
}
