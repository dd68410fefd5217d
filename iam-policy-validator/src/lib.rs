//! This crate provides the core logic for IAM Policy Validator:
//! - Structural validation of IAM policy documents
//! - Detection of statements granting access to all resources (`"Resource": "*"`)
//! - Loading `.json` policy files into a generic JSON tree
//!
//! Validation and scanning are pure functions over a `serde_json::Value`; only
//! the loader touches the filesystem.

pub mod commands;
mod error;
mod loading;
mod scanning;
mod types;
pub mod validation;

// Re-exports for a small, focused public API
pub use commands::IamPolicyValidatorService;
pub use error::{IamPolicyValidatorError, IamPolicyValidatorResult};
pub use loading::{load_policy, parse_policy, read_json_from_file, LoadError, LoadResult};
pub use scanning::{has_no_unrestricted_resource, unrestricted_statements};
pub use types::{CheckResult, Effect, WILDCARD_RESOURCE};
pub use validation::{
    validate_iam_policy, PolicyValidator, ValidationError, ValidationResult, ValidatorConfig,
};
