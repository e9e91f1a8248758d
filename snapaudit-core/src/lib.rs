pub mod error;
pub mod output_macros;

pub use error::{AuditError, Result};
