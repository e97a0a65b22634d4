use crate::error::{EnvError, Result};
use crate::git::RevisionSource;

/// Mock revision source for testing without actual git operations
pub struct MockRevisionSource {
    count: Option<u64>,
}

impl MockRevisionSource {
    /// Create a mock that reports a fixed revision count
    pub fn with_count(count: u64) -> Self {
        MockRevisionSource { count: Some(count) }
    }

    /// Create a mock whose query always fails
    pub fn failing() -> Self {
        MockRevisionSource { count: None }
    }
}

impl RevisionSource for MockRevisionSource {
    fn revision_count(&self) -> Result<u64> {
        self.count
            .ok_or_else(|| EnvError::revision("mock revision source configured to fail"))
    }
}
