//! Deployment environment resolution.
//!
//! [EnvResolver] is constructed once per process from explicit inputs — an
//! argv snapshot, an [Overrides] snapshot of the relevant environment
//! variables, a resolution root, and a [RevisionSource] — and computes the
//! immutable [Environment] from them. Tests construct fresh resolvers with
//! injected inputs instead of mutating process globals.

use crate::error::Result;
use crate::git::{GitRevisionSource, RevisionSource};
use crate::metadata;
use crate::mode::Mode;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding mode detection.
pub const MODE_VAR: &str = "ENV_MODE";

/// Environment variable carrying the CI build number.
pub const BUILD_NUMBER_VAR: &str = "BUILD_NUMBER";

/// Branch label used in development mode.
pub const DEVELOP_BRANCH: &str = "develop";

/// Branch label used in test mode.
pub const MASTER_BRANCH: &str = "master";

/// Snapshot of the environment variables consulted during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Raw value of the mode override variable, if set and non-empty.
    pub mode: Option<String>,
    /// Raw value of the build-number variable, if set.
    pub build_number: Option<String>,
}

impl Overrides {
    /// Capture the override variables from the process environment.
    pub fn from_env() -> Self {
        Overrides {
            mode: std::env::var(MODE_VAR).ok().filter(|v| !v.is_empty()),
            build_number: std::env::var(BUILD_NUMBER_VAR).ok(),
        }
    }
}

/// Resolves deployment mode, branch, and version labels from explicit inputs.
pub struct EnvResolver {
    argv: Vec<String>,
    overrides: Overrides,
    root: PathBuf,
    revisions: Box<dyn RevisionSource>,
}

impl EnvResolver {
    /// Create a resolver rooted at the given directory.
    ///
    /// Captures the process argv and environment variables, and probes the
    /// git repository discovered from `root`. Use the `with_*` methods to
    /// substitute any of these inputs.
    ///
    /// # Arguments
    /// * `root` - Resolution root holding the package descriptor and repository
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        EnvResolver {
            argv: std::env::args().collect(),
            overrides: Overrides::from_env(),
            revisions: Box::new(GitRevisionSource::new(&root)),
            root,
        }
    }

    /// Create a resolver rooted at the current working directory.
    pub fn from_cwd() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Replace the captured argv snapshot.
    pub fn with_argv(mut self, argv: Vec<String>) -> Self {
        self.argv = argv;
        self
    }

    /// Replace the captured environment-variable snapshot.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replace the revision source.
    pub fn with_revision_source(mut self, revisions: Box<dyn RevisionSource>) -> Self {
        self.revisions = revisions;
        self
    }

    /// The mode this resolver will select.
    pub fn mode(&self) -> Mode {
        Mode::resolve(self.overrides.mode.as_deref(), &self.argv)
    }

    /// Resolve the environment.
    ///
    /// A failed revision query and a missing or non-numeric build number
    /// degrade to `0`; an absent package descriptor degrades to
    /// `"0.0.0"`. The only surfaced error is a malformed semantic version
    /// in the descriptor while resolving a production version, since
    /// silently guessing a release number would hide a broken artifact.
    ///
    /// # Returns
    /// * `Ok(Environment)` - The resolved, immutable environment
    /// * `Err(EnvError::Version)` - Production mode with a malformed version
    pub fn resolve(&self) -> Result<Environment> {
        let mode = self.mode();

        let (version, branch) = match mode {
            Mode::Production => {
                let raw = metadata::read_package_version(&self.root);
                let parsed = metadata::parse_semver(&raw)?;
                let version =
                    format!("{}.{}.{}", parsed.major, parsed.minor, parsed.patch);
                let branch = format!("v{}", version);
                (version, branch)
            }
            Mode::Test | Mode::Development => {
                let branch = match mode {
                    Mode::Test => MASTER_BRANCH,
                    _ => DEVELOP_BRANCH,
                };
                let revision_count = self.revisions.revision_count().unwrap_or(0);
                let build_number = self.build_number();
                let version = format!("{}-r{}_b{}", branch, revision_count, build_number);
                (version, branch.to_string())
            }
        };

        Ok(Environment {
            mode,
            branch,
            version,
            root: self.root.clone(),
        })
    }

    fn build_number(&self) -> u64 {
        self.overrides
            .build_number
            .as_deref()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }
}

/// Fully resolved environment values, immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    mode: Mode,
    branch: String,
    version: String,
    root: PathBuf,
}

impl Environment {
    /// The resolved deployment mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The display branch name.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The build/version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The resolution root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if the environment is development.
    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    /// Check if the environment is testing.
    pub fn is_testing(&self) -> bool {
        self.mode.is_testing()
    }

    /// Check if the environment is production.
    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    /// Write the four diagnostic lines to the given sink.
    ///
    /// Purely observational; write failures are discarded so this can be
    /// called unconditionally from any reporting path.
    pub fn show(&self, sink: &mut dyn Write) {
        let _ = writeln!(sink, "Mode: {}", self.mode);
        let _ = writeln!(sink, "Version: {}", self.version);
        let _ = writeln!(sink, "Branch: {}", self.branch);
        let _ = writeln!(sink, "Root: {}", self.root.display());
    }

    /// [Self::show] to standard output.
    pub fn show_stdout(&self) {
        self.show(&mut std::io::stdout());
    }
}
