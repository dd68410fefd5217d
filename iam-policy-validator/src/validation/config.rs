//! Validator configuration

/// The only policy language version accepted by the validator.
pub const SUPPORTED_POLICY_VERSION: &str = "2012-10-17";

/// Partition used when none is configured.
pub const DEFAULT_PARTITION: &str = "aws";

/// Maximum length of a policy name.
pub const MAX_POLICY_NAME_LENGTH: usize = 128;

/// Maximum length of a scoped (non-wildcard) resource.
pub const MAX_RESOURCE_LENGTH: usize = 200;

/// Tunable limits for [`PolicyValidator`](super::PolicyValidator).
///
/// The defaults reproduce the rules for the standard `aws` partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Required value of `PolicyDocument.Version`
    pub supported_version: String,
    /// Partition name that scoped resources must carry, without colons
    pub partition: String,
    /// Upper bound on the policy name length
    pub max_name_length: usize,
    /// Upper bound on the length of a scoped resource
    pub max_resource_length: usize,
}

impl ValidatorConfig {
    /// Default limits, with scoped resources required to live in `partition`.
    pub fn for_partition(partition: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            ..Self::default()
        }
    }

    /// Substring every scoped resource must contain, e.g. `:aws:`.
    pub fn partition_marker(&self) -> String {
        format!(":{}:", self.partition)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            supported_version: SUPPORTED_POLICY_VERSION.to_string(),
            partition: DEFAULT_PARTITION.to_string(),
            max_name_length: MAX_POLICY_NAME_LENGTH,
            max_resource_length: MAX_RESOURCE_LENGTH,
        }
    }
}
