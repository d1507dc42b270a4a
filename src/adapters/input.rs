use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// Reads a whole batch of commands from `path`, or from stdin when absent.
pub fn read_batch<P: AsRef<Path>>(path: Option<P>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!("Reading commands from {}", path.as_ref().display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("Reading commands from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_batch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "glob is I\nhow much is glob ?\n").unwrap();

        let text = read_batch(Some(file.path())).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = read_batch(Some("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, crate::utils::error::GuideError::IoError(_)));
    }
}
