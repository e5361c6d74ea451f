// Local filesystem adapter - Directory creation and input discovery

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::domain::rules::InputSelector;
use crate::ports::*;

/// Filesystem adapter backed by the local disk
#[derive(Debug, Default, Clone)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }

    fn scan(dir_path: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, DomainError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir_path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                DomainError::DirectoryError(format!(
                    "Failed to read {}: {}",
                    dir_path.display(),
                    e
                ))
            })?;

            if entry.file_type().is_file() && InputSelector::is_supported(entry.path(), extensions)
            {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(dir_path).await.map_err(|e| {
            DomainError::DirectoryError(format!(
                "Failed to create directory {}: {}",
                dir_path.display(),
                e
            ))
        })
    }

    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        Ok(tokio::fs::try_exists(file_path).await?)
    }

    async fn list_media_files(
        &self,
        dir_path: &Path,
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, DomainError> {
        let dir = dir_path.to_path_buf();
        let extensions = extensions.to_vec();

        tokio::task::spawn_blocking(move || Self::scan(&dir, &extensions))
            .await
            .map_err(|e| DomainError::Io(format!("Directory scan aborted: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["mp4".to_string(), "mkv".to_string()]
    }

    #[tokio::test]
    async fn test_list_media_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.MP4", "a.mkv", "notes.txt", "c.mp4"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.mp4")).unwrap();
        std::fs::write(dir.path().join("nested.mp4").join("d.mp4"), b"x").unwrap();

        let files = LocalFsAdapter::new()
            .list_media_files(dir.path(), &exts())
            .await
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.mkv", "b.MP4", "c.mp4"]);
    }

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("video");
        let fs = LocalFsAdapter::new();

        fs.create_directory(&target).await.unwrap();
        fs.create_directory(&target).await.unwrap();

        assert!(fs.file_exists(&target).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_directory_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = LocalFsAdapter::new().create_directory(&blocker.join("sub")).await;
        assert!(matches!(result, Err(DomainError::DirectoryError(_))));
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalFsAdapter::new()
            .list_media_files(&dir.path().join("absent"), &exts())
            .await;
        assert!(matches!(result, Err(DomainError::DirectoryError(_))));
    }
}
