//! Error types shared by every stage of the codec.

/// Errors produced by compression and decompression.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("corrupt stream: {0}")]
    CorruptStream(String),
    #[error(transparent)]
    Io(#[from] std::io::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failure_propagates_unchanged() {
        let io_err = std::fs::read("/nonexistent/path/lzhuff-error-test").unwrap_err();
        let kind = io_err.kind();
        let err: Error = io_err.into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(),kind),
            other => panic!("expected Error::Io, got {:?}",other)
        }
    }
}
