use crate::error::Result;
use crate::git::RevisionSource;
use git2::Repository;
use std::path::PathBuf;

/// Revision source backed by a real git repository.
///
/// The repository is discovered from the configured root (walking up parent
/// directories, as `git` itself does). The ambient working directory is
/// never consulted or modified.
pub struct GitRevisionSource {
    root: PathBuf,
}

impl GitRevisionSource {
    /// Create a revision source rooted at the given directory.
    ///
    /// # Arguments
    /// * `root` - Directory to discover the repository from
    pub fn new(root: impl Into<PathBuf>) -> Self {
        GitRevisionSource { root: root.into() }
    }
}

impl RevisionSource for GitRevisionSource {
    fn revision_count(&self) -> Result<u64> {
        let repo = Repository::discover(&self.root)?;

        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;

        let mut count = 0u64;
        for oid in revwalk {
            let commit = repo.find_commit(oid?)?;
            // A merge commit has more than one parent
            if commit.parent_count() <= 1 {
                count += 1;
            }
        }

        Ok(count)
    }
}
