//! Source-control revision queries
//!
//! This module provides a trait-based abstraction over the one git query
//! environment resolution needs: counting the non-merge commits reachable
//! from the current position. The concrete implementations include:
//!
//! - [repository::GitRevisionSource]: a real implementation using the `git2` crate
//! - [mock::MockRevisionSource]: a mock implementation for testing
//!
//! The real implementation is rooted at an explicit directory rather than
//! the ambient working directory, so a failed probe can never leave the
//! process in the wrong place.

pub mod mock;
pub mod repository;

pub use mock::MockRevisionSource;
pub use repository::GitRevisionSource;

use crate::error::Result;

/// Counts revisions reachable from the current source-control position.
///
/// ## Error Handling
///
/// Implementations surface every failure (not a repository, unborn HEAD)
/// as an `Err`; callers that tolerate failure substitute their own default.
pub trait RevisionSource: Send + Sync {
    /// Number of non-merge commits reachable from HEAD.
    ///
    /// # Returns
    /// * `Ok(count)` - Commit count, merges excluded
    /// * `Err` - If the history cannot be walked
    fn revision_count(&self) -> Result<u64>;
}
