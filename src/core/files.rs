use crate::utils::error::{Result, ToolsError};
use std::path::Path;

/// Reads the whole file as UTF-8 text.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!("Reading file: {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| ToolsError::from_io(path, e))?;
    decode(path, bytes)
}

/// Creates or truncates the file and writes `content` as UTF-8.
///
/// The parent directory must already exist. The write is not atomic.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Writing {} bytes to {}", content.len(), path.display());
    std::fs::write(path, content)?;
    Ok(())
}

pub async fn read_file_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!("Reading file: {}", path.display());
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ToolsError::from_io(path, e))?;
    decode(path, bytes)
}

pub async fn write_file_async<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Writing {} bytes to {}", content.len(), path.display());
    tokio::fs::write(path, content).await?;
    Ok(())
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| ToolsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        for content in ["", "hello", "多語言 ✓\nline two\r\n", "tab\tseparated\0nul"] {
            write_file(&path, content).unwrap();
            assert_eq!(read_file(&path).unwrap(), content);
        }
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();

        assert_eq!(read_file(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("note.txt");

        let err = write_file(&path, "content").unwrap_err();
        assert!(matches!(err, ToolsError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        match read_file(&path) {
            Err(ToolsError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.bin");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, ToolsError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_async_round_trip_and_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("async.txt");

        write_file_async(&path, "async content").await.unwrap();
        assert_eq!(read_file_async(&path).await.unwrap(), "async content");

        let missing = temp_dir.path().join("missing.txt");
        let err = read_file_async(&missing).await.unwrap_err();
        assert!(matches!(err, ToolsError::NotFound { .. }));
    }
}
