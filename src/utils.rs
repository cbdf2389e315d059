use std::io;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "nws_forecast";

pub fn get_data_dir() -> io::Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine system data directory",
            )
        })
        .map(|p| p.join(DATA_DIR_NAME))
}

pub async fn ensure_data_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("data path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tokio::fs::create_dir_all(path).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data");

        ensure_data_dir_exists(&path).await.unwrap();
        assert!(path.is_dir());

        // Idempotent on an existing directory.
        ensure_data_dir_exists(&path).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_a_file_at_the_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("occupied");
        tokio::fs::write(&path, "not a directory").await.unwrap();

        let err = ensure_data_dir_exists(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
