use std::path::Path;

use crate::error::IoError;

/// Fails with [`IoError::FileDoesNotExist`] unless `file_path` is an existing file.
pub fn check_file_exist(file_path: impl AsRef<Path>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }
    Ok(())
}

/// Creates `dir_path` and all its parents if they are missing.
///
/// An empty path names the current directory and is a no-op.
pub fn mkdir_or_exist(dir_path: impl AsRef<Path>) -> Result<(), IoError> {
    let dir_path = dir_path.as_ref();
    if dir_path.as_os_str().is_empty() || dir_path.is_dir() {
        return Ok(());
    }
    log::debug!("creating directory {}", dir_path.display());
    std::fs::create_dir_all(dir_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn check_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("a.bin");

        let err = check_file_exist(&file_path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        std::fs::write(&file_path, b"x")?;
        check_file_exist(&file_path)?;

        // a directory is not a readable image file
        assert!(check_file_exist(tmp_dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn mkdir_nested() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let nested = tmp_dir.path().join("a").join("b").join("c");

        mkdir_or_exist(&nested)?;
        assert!(nested.is_dir());

        // idempotent
        mkdir_or_exist(&nested)?;
        mkdir_or_exist("")?;
        Ok(())
    }
}
