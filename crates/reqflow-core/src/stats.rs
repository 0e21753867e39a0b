//! Per-batch success/failure accounting.

use std::fmt;

use crate::error::ParseError;

/// Counts of parsed and rejected lines for one batch, plus the most recent
/// rejection. Earlier rejection details are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    success: u64,
    errors: u64,
    last_error: Option<ParseError>,
}

impl BatchStats {
    pub fn add_success(&mut self) {
        self.success += 1;
    }

    pub fn add_error(&mut self, err: ParseError) {
        self.errors += 1;
        self.last_error = Some(err);
    }

    pub fn success(&self) -> u64 {
        self.success
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Fold a later batch into this one. The later batch's last error wins
    /// when it has one.
    pub fn merge(&mut self, later: BatchStats) {
        self.success += later.success;
        self.errors += later.errors;
        if later.last_error.is_some() {
            self.last_error = later.last_error;
        }
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success {}, errors {}", self.success, self.errors)?;
        if let Some(err) = &self.last_error {
            write!(f, ", last error: {err}")?;
        }
        Ok(())
    }
}
