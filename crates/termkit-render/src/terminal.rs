//! Terminal capability detection.
//!
//! Decides, once per process, whether stdout understands ANSI escape
//! sequences. The decision is cached in a [`OnceCell`] on first access and
//! never re-evaluated.
//!
//! The rules, checked in order:
//!
//! 1. `NO_COLOR` set (to anything) disables ANSI output.
//! 2. On Windows, ANSI output is enabled only when a known ANSI-capable
//!    terminal is detected (`ANSICON`, `ConEmuANSI=ON`, `WT_SESSION`).
//! 3. Elsewhere, stdout must be a TTY and `TERM` must be set to something
//!    other than `dumb`.
//!
//! The detection logic itself is a pure function of an [`EnvReader`], a
//! [`Platform`] and the TTY status, so it can be exercised with [`MockEnv`]:
//!
//! ```rust
//! use termkit_render::terminal::{detect_ansi_support, MockEnv, Platform};
//!
//! let env = MockEnv::new().with_var("TERM", "xterm-256color");
//! assert!(detect_ansi_support(&env, Platform::Unix, true));
//! assert!(!detect_ansi_support(&env, Platform::Unix, false));
//!
//! let env = env.with_var("NO_COLOR", "1");
//! assert!(!detect_ansi_support(&env, Platform::Unix, true));
//! ```

use std::collections::HashMap;

use console::Term;
use once_cell::sync::OnceCell;

static ANSI_SUPPORT: OnceCell<bool> = OnceCell::new();

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// The platform family, as far as escape-sequence support is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows consoles, which only speak ANSI inside known emulators.
    Windows,
    /// Everything else.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Returns whether stdout supports ANSI escape sequences.
///
/// Computed on first call from the real process environment and cached for
/// the lifetime of the process.
pub fn supports_ansi() -> bool {
    *ANSI_SUPPORT.get_or_init(|| {
        let supported = detect_ansi_support(&RealEnv, Platform::current(), Term::stdout().is_term());
        tracing::debug!(supported, "detected terminal ANSI support");
        supported
    })
}

/// Evaluates the ANSI detection rules against the given inputs.
pub fn detect_ansi_support(env: &dyn EnvReader, platform: Platform, stdout_is_tty: bool) -> bool {
    if env.var("NO_COLOR").is_some() {
        return false;
    }

    match platform {
        Platform::Windows => {
            env.var("ANSICON").is_some()
                || env.var("ConEmuANSI").as_deref() == Some("ON")
                || env.var("WT_SESSION").is_some()
        }
        Platform::Unix => {
            stdout_is_tty
                && env
                    .var("TERM")
                    .is_some_and(|term| !term.is_empty() && !term.eq_ignore_ascii_case("dumb"))
        }
    }
}
