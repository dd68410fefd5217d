//! Shared types for IAM Policy Validator

use serde::{Deserialize, Serialize};

/// JSON field names of an IAM policy as it is stored on disk.
pub(crate) mod fields {
    pub(crate) const POLICY_NAME: &str = "PolicyName";
    pub(crate) const POLICY_DOCUMENT: &str = "PolicyDocument";
    pub(crate) const VERSION: &str = "Version";
    pub(crate) const STATEMENT: &str = "Statement";
    pub(crate) const EFFECT: &str = "Effect";
    pub(crate) const ACTION: &str = "Action";
    pub(crate) const RESOURCE: &str = "Resource";
}

/// Resource value granting access to every resource.
pub const WILDCARD_RESOURCE: &str = "*";

/// Effect of a policy statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    /// Exact, case-sensitive match on `"Allow"` / `"Deny"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Allow" => Some(Self::Allow),
            "Deny" => Some(Self::Deny),
            _ => None,
        }
    }
}

/// Outcome of checking a single policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckResult {
    pub policy_name: String,
    pub statement_count: usize,
    /// `false` when at least one statement has `"Resource": "*"`
    pub no_unrestricted_resource: bool,
    /// Indices of the statements whose resource is exactly `*`
    pub unrestricted_statements: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_parse_is_case_sensitive() {
        assert_eq!(Effect::parse("Allow"), Some(Effect::Allow));
        assert_eq!(Effect::parse("Deny"), Some(Effect::Deny));
        assert_eq!(Effect::parse("allow"), None);
        assert_eq!(Effect::parse("DENY"), None);
        assert_eq!(Effect::parse("Permit"), None);
        assert_eq!(Effect::parse(""), None);
    }

    #[test]
    fn test_check_result_serializes_pascal_case() {
        let result = CheckResult {
            policy_name: "test".to_string(),
            statement_count: 2,
            no_unrestricted_resource: false,
            unrestricted_statements: vec![1],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["PolicyName"], "test");
        assert_eq!(json["StatementCount"], 2);
        assert_eq!(json["NoUnrestrictedResource"], false);
        assert_eq!(json["UnrestrictedStatements"], serde_json::json!([1]));
    }
}
