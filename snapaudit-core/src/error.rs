use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    /// Missing or partial AWS credentials.
    Auth(String),
    /// Any other session or configuration setup failure.
    Init(String),
    /// Listing or lookup transport failure outside the isolated per-item path.
    Fetch(String),
    /// Output table write failure.
    Report(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for AuditError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AuditError::Auth(s) => write!(f, "Authentication error: {}", s),
            AuditError::Init(s) => write!(f, "Initialization error: {}", s),
            AuditError::Fetch(s) => write!(f, "Fetch error: {}", s),
            AuditError::Report(s) => write!(f, "Report error: {}", s),
            AuditError::Io(e) => write!(f, "I/O error: {}", e),
            AuditError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl AuditError {
    /// Setup failures abort the run with a non-zero exit; everything else is
    /// printed by the top-level handler and the process exits normally.
    pub fn is_fatal_setup(&self) -> bool {
        matches!(self, AuditError::Auth(_) | AuditError::Init(_))
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_display() {
        let err = AuditError::Auth("AWS credentials not found".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication error: AWS credentials not found"
        );
    }

    #[test]
    fn fetch_error_display() {
        let err = AuditError::Fetch("describe_snapshots page failed".to_string());
        assert_eq!(
            err.to_string(),
            "Fetch error: describe_snapshots page failed"
        );
    }

    #[test]
    fn setup_errors_are_fatal() {
        assert!(AuditError::Auth("x".into()).is_fatal_setup());
        assert!(AuditError::Init("x".into()).is_fatal_setup());
    }

    #[test]
    fn runtime_errors_are_not_fatal() {
        assert!(!AuditError::Fetch("x".into()).is_fatal_setup());
        assert!(!AuditError::Report("x".into()).is_fatal_setup());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(!AuditError::from(io).is_fatal_setup());
    }
}
