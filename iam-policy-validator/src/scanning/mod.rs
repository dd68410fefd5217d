//! Detection of statements that grant access to all resources
//!
//! These functions expect a document that already passed
//! [`validate_iam_policy`](crate::validate_iam_policy). They do not re-validate:
//! a missing statement list is treated as empty and non-string resources as scoped.
//!
//! Matching is on the exact string `*`. Unlike the validator, no whitespace is
//! trimmed, so `" * "` is not reported here.

use serde_json::Value;

use crate::types::{fields, WILDCARD_RESOURCE};

fn statements(policy: &Value) -> &[Value] {
    policy
        .get(fields::POLICY_DOCUMENT)
        .and_then(|document| document.get(fields::STATEMENT))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn is_unrestricted(statement: &Value) -> bool {
    statement.get(fields::RESOURCE).and_then(Value::as_str) == Some(WILDCARD_RESOURCE)
}

/// Returns `false` as soon as a statement has `"Resource": "*"`, `true` otherwise.
pub fn has_no_unrestricted_resource(policy: &Value) -> bool {
    for statement in statements(policy) {
        if is_unrestricted(statement) {
            return false;
        }
    }
    true
}

/// Indices of every statement whose resource is exactly `*`, in document order.
pub fn unrestricted_statements(policy: &Value) -> Vec<usize> {
    statements(policy)
        .iter()
        .enumerate()
        .filter(|(_, statement)| is_unrestricted(statement))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy_with_resources(resources: &[&str]) -> Value {
        let statements: Vec<Value> = resources
            .iter()
            .map(|resource| {
                json!({
                    "Effect": "Allow",
                    "Action": ["s3:GetObject"],
                    "Resource": resource
                })
            })
            .collect();
        json!({
            "PolicyName": "test",
            "PolicyDocument": {"Version": "2012-10-17", "Statement": statements}
        })
    }

    #[test]
    fn test_scoped_resources_are_safe() {
        let policy = policy_with_resources(&["arn:aws:s3:::my-bucket", "arn:aws:s3:::my-bucket/*"]);
        assert!(has_no_unrestricted_resource(&policy));
        assert!(unrestricted_statements(&policy).is_empty());
    }

    #[test]
    fn test_single_asterisk_is_unrestricted() {
        let policy = policy_with_resources(&["arn:aws:s3:::my-bucket", "*", "*"]);
        assert!(!has_no_unrestricted_resource(&policy));
        assert_eq!(unrestricted_statements(&policy), vec![1, 2]);
    }

    #[test]
    fn test_padded_asterisk_is_not_matched() {
        let policy = policy_with_resources(&[" * ", "*\n"]);
        assert!(has_no_unrestricted_resource(&policy));
        assert!(unrestricted_statements(&policy).is_empty());
    }

    #[test]
    fn test_repeated_calls_agree() {
        let policy = policy_with_resources(&["arn:aws:s3:::my-bucket", "*"]);
        let first = has_no_unrestricted_resource(&policy);
        for _ in 0..5 {
            assert_eq!(has_no_unrestricted_resource(&policy), first);
        }
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        assert!(has_no_unrestricted_resource(&json!({})));
        assert!(has_no_unrestricted_resource(&json!({"PolicyDocument": {"Statement": "*"}})));
        assert!(has_no_unrestricted_resource(&json!({
            "PolicyDocument": {"Statement": [{"Resource": ["*"]}, "*"]}
        })));
    }
}
