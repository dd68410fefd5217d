//! JSON deserialization of policy text into a generic `serde_json::Value` tree.

use serde_json::Value;

use super::LoadResult;

/// Parse policy text without imposing any schema; shape checks belong to validation.
pub fn parse_policy(json_str: &str) -> LoadResult<Value> {
    Ok(serde_json::from_str(json_str)?)
}
