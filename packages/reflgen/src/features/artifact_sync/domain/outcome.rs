//! Synchronization outcome

use std::fmt;

/// Result of synchronizing one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Content differed (or the artifact was missing) and was replaced
    Written,
    /// Content already matched; storage untouched
    Unchanged,
}

impl SyncOutcome {
    pub fn is_written(self) -> bool {
        matches!(self, SyncOutcome::Written)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyncOutcome::Written => "written",
            SyncOutcome::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
