use thiserror::Error;

/// Errors of the request/response layer.
///
/// The matching core never fails; these only arise while reading and
/// interpreting a request.
#[derive(Error, Debug)]
pub enum KmpError {
    #[error("Invalid mode: {0:?} (expected 1 or 2)")]
    InvalidMode(String),

    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KmpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_display() {
        let err = KmpError::InvalidMode("3".into());
        assert_eq!(err.to_string(), "Invalid mode: \"3\" (expected 1 or 2)");
    }

    #[test]
    fn test_missing_input_display() {
        let err = KmpError::MissingInput("pattern");
        assert_eq!(err.to_string(), "Missing input: pattern");
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))?;
            Ok(())
        }
        match read() {
            Err(KmpError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
