//! Structural validation of IAM policy documents (pure Rust, no I/O)

pub mod config;
mod name;
mod validator;

pub use config::ValidatorConfig;
pub use name::{is_policy_name_length_valid, matches_policy_name_pattern};
pub use validator::{validate_iam_policy, PolicyValidator};

use thiserror::Error;

/// First rule a policy document violates.
///
/// Statement-level variants carry the zero-based index of the offending statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("PolicyDocument is missing or invalid.")]
    MissingPolicyDocument,
    #[error("PolicyName is missing or invalid.")]
    MissingPolicyName,
    #[error("PolicyName does not match the required pattern.")]
    InvalidPolicyNamePattern,
    #[error("PolicyName length is outside the allowed range (1-{max}).")]
    PolicyNameLength { max: usize },
    #[error("Invalid or missing Version in PolicyDocument (expected {expected}).")]
    InvalidVersion { expected: String },
    #[error("Statement array is either missing or empty.")]
    MissingStatements,
    #[error("Invalid or missing Effect in Statement {index}.")]
    InvalidEffect { index: usize },
    #[error("Action array is missing or empty in Statement {index}.")]
    MissingActions { index: usize },
    #[error("Invalid or missing Resource in Statement {index}.")]
    InvalidResource { index: usize },
    #[error("Resource field in Statement {index} must include '{partition}' partition.")]
    MissingPartition { index: usize, partition: String },
    #[error("Resource field in Statement {index} exceeds maximum allowed length ({max}).")]
    ResourceTooLong { index: usize, max: usize },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
