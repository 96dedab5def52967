//! Result type alias for lintset operations

use crate::error::LintsetError;

/// Standard Result type for lintset operations
pub type Result<T> = std::result::Result<T, LintsetError>;
