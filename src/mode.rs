use crate::error::EnvError;
use std::fmt;
use std::str::FromStr;

/// Launch flag selecting development mode.
pub const DEVELOPMENT_FLAG: &str = "--development";
/// Launch flags selecting test mode. Both spellings are accepted.
pub const TESTING_FLAGS: [&str; 2] = ["--testing", "--test"];
/// Launch flag selecting production mode.
pub const PRODUCTION_FLAG: &str = "--production";

/// Deployment mode of the running process.
///
/// Controls how the branch and version labels are formatted. Exactly one
/// mode is active per resolution; `Development` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Test,
    Production,
}

impl Mode {
    /// Check if this is development mode.
    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    /// Check if this is test mode.
    pub fn is_testing(self) -> bool {
        self == Mode::Test
    }

    /// Check if this is production mode.
    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    /// Scan launch arguments for a mode flag.
    ///
    /// Flags are matched by membership, not position. The first flag in
    /// precedence order wins: `--development`, then `--testing`/`--test`,
    /// then `--production`.
    ///
    /// # Arguments
    /// * `argv` - Snapshot of the process launch arguments
    ///
    /// # Returns
    /// * `Some(Mode)` - A recognized flag was present
    /// * `None` - No mode flag in the argument list
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Option<Mode> {
        let has = |flag: &str| argv.iter().any(|arg| arg.as_ref() == flag);

        if has(DEVELOPMENT_FLAG) {
            Some(Mode::Development)
        } else if TESTING_FLAGS.iter().any(|&f| has(f)) {
            Some(Mode::Test)
        } else if has(PRODUCTION_FLAG) {
            Some(Mode::Production)
        } else {
            None
        }
    }

    /// Resolve the active mode from an override value and launch arguments.
    ///
    /// Resolution order, first match wins:
    /// 1. A non-empty override equal to one of the three mode literals.
    ///    Any other value is ignored, never an error.
    /// 2. A mode flag in the launch arguments.
    /// 3. `Development`.
    pub fn resolve<S: AsRef<str>>(override_value: Option<&str>, argv: &[S]) -> Mode {
        if let Some(mode) = override_value
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<Mode>().ok())
        {
            return mode;
        }

        Mode::from_argv(argv).unwrap_or_default()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = match self {
            Mode::Development => "development",
            Mode::Test => "test",
            Mode::Production => "production",
        };
        write!(f, "{}", literal)
    }
}

impl FromStr for Mode {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Mode::Development),
            "test" => Ok(Mode::Test),
            "production" => Ok(Mode::Production),
            _ => Err(EnvError::Mode(s.to_string())),
        }
    }
}
