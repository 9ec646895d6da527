// crates/splice_pricing/src/config.rs

use std::env;
use std::path::PathBuf;

use splice_markers::{ScanMode, DEFAULT_SOURCE_PATH, DEFAULT_TARGET_PATH};

/// Environment variable that overrides the default project root.
pub const ROOT_ENV_VAR: &str = "SPLICE_PROJECT_ROOT";

/// Runtime configuration composed from CLI + environment.
/// `Default` reproduces the hard-coded behaviour: both paths relative to the
/// current directory, strict scanning, file rewritten in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpliceConfig {
    pub root: PathBuf,
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: ScanMode,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
            target: PathBuf::from(DEFAULT_TARGET_PATH),
            mode: ScanMode::Strict,
            dry_run: false,
            verbose: false,
        }
    }
}

impl SpliceConfig {
    /// Root taken from `SPLICE_PROJECT_ROOT`, if set and non-empty.
    pub fn root_from_env() -> Option<PathBuf> {
        env::var_os(ROOT_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Component file path. An absolute `source` ignores the root.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// Page file path. An absolute `target` ignores the root.
    pub fn target_path(&self) -> PathBuf {
        self.root.join(&self.target)
    }

    /// Default log filter: `debug` with `--verbose`, otherwise `warn`.
    /// `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Basename of the target, used in the status report.
    pub fn target_name(&self) -> String {
        self.target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.display().to_string())
    }
}
