//! Policy file reading using `tokio::fs`.

use log::trace;
use std::path::Path;
use tokio::fs;

use super::{LoadError, LoadResult};

const POLICY_FILE_EXTENSION: &str = "json";

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(POLICY_FILE_EXTENSION))
}

/// Read the entire contents of a `.json` policy file as a UTF-8 string.
///
/// The extension is compared case-insensitively and checked before the file is
/// touched, so a wrong extension is reported even for paths that do not exist.
pub async fn read_json_from_file(path: impl AsRef<Path>) -> LoadResult<String> {
    let path = path.as_ref();
    if !has_json_extension(path) {
        return Err(LoadError::WrongExtension {
            path: path.to_path_buf(),
        });
    }

    trace!("Reading policy file: {}", path.display());
    fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_has_json_extension() {
        assert!(has_json_extension(Path::new("policy.json")));
        assert!(has_json_extension(Path::new("dir/policy.JSON")));
        assert!(!has_json_extension(Path::new("policy.yaml")));
        assert!(!has_json_extension(Path::new("policy.json.bak")));
        assert!(!has_json_extension(Path::new("json")));
    }

    #[tokio::test]
    async fn test_read_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("policy.json");
        fs::write(&file, r#"{"PolicyName": "test"}"#).await.unwrap();

        let content = read_json_from_file(&file).await.unwrap();

        assert_eq!(content, r#"{"PolicyName": "test"}"#);
    }

    #[tokio::test]
    async fn test_uppercase_extension_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("POLICY.JSON");
        fs::write(&file, "{}").await.unwrap();

        assert_eq!(read_json_from_file(&file).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_wrong_extension() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("policy.txt");
        fs::write(&file, "{}").await.unwrap();

        let error = read_json_from_file(&file).await.unwrap_err();

        assert!(matches!(error, LoadError::WrongExtension { .. }));
        assert!(error.to_string().contains("policy.txt"));
    }

    #[tokio::test]
    async fn test_file_not_found() {
        let error = read_json_from_file(PathBuf::from("nonexistent_policy.json"))
            .await
            .unwrap_err();

        assert!(matches!(error, LoadError::NotFound { .. }));
        assert!(error.to_string().contains("nonexistent_policy.json"));
    }

    #[tokio::test]
    async fn test_directory_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("looks_like.json");
        fs::create_dir(&dir).await.unwrap();

        let error = read_json_from_file(&dir).await.unwrap_err();

        assert!(matches!(error, LoadError::Read { .. }));
    }
}
