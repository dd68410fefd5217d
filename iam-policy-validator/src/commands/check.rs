//! Check logic for IAM Policy Validator service

use log::{info, warn};
use serde_json::Value;
use std::path::Path;

use crate::error::IamPolicyValidatorResult;
use crate::loading::load_policy;
use crate::scanning::{has_no_unrestricted_resource, unrestricted_statements};
use crate::types::{fields, CheckResult};
use crate::validation::ValidationResult;

impl super::service::IamPolicyValidatorService {
    /// Validate an already-deserialized policy, then scan it for `"Resource": "*"`.
    ///
    /// The scan only runs once validation has passed.
    pub fn check_document(&self, policy: &Value) -> ValidationResult<CheckResult> {
        self.validator.validate(policy)?;

        let unrestricted = unrestricted_statements(policy);
        let no_unrestricted_resource = has_no_unrestricted_resource(policy);

        let policy_name = policy
            .get(fields::POLICY_NAME)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let statement_count = policy[fields::POLICY_DOCUMENT][fields::STATEMENT]
            .as_array()
            .map_or(0, Vec::len);

        for index in &unrestricted {
            warn!(
                "Statement {} of policy '{}' grants access to all resources",
                index, policy_name
            );
        }
        info!(
            "Policy '{}' is valid ({} statements, unrestricted resource: {})",
            policy_name, statement_count, !no_unrestricted_resource
        );

        Ok(CheckResult {
            policy_name,
            statement_count,
            no_unrestricted_resource,
            unrestricted_statements: unrestricted,
        })
    }

    /// Load the policy file at `path` and check it.
    pub async fn check_file(&self, path: impl AsRef<Path>) -> IamPolicyValidatorResult<CheckResult> {
        let policy = load_policy(path).await?;
        Ok(self.check_document(&policy)?)
    }
}
