// Error types shared by the library modules. The UI prints these to the
// user and keeps the menu running; only I/O and terminal failures bubble
// up to `main` as `anyhow::Error`.

use std::process::ExitStatus;
use thiserror::Error;

/// Rejections from the in-memory link list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Link name cannot be empty.")]
    EmptyName,
    #[error("URL cannot be empty.")]
    EmptyUrl,
    #[error("No links configured.")]
    NoLinks,
    #[error("Invalid selection.")]
    InvalidSelection,
    #[error("Invalid input. Please enter valid numbers.")]
    InvalidNumber,
    #[error("Invalid order. Must include all links exactly once.")]
    InvalidOrder,
}

/// Failures of the git publish step.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository or git not installed.")]
    NotARepository,
    #[error("could not run `git {step}`: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// `output` is git's stderr, or its stdout when stderr is empty
    /// (`git commit` reports "nothing to commit" on stdout).
    #[error("`git {step}` failed ({status}): {output}")]
    StepFailed {
        step: &'static str,
        status: ExitStatus,
        output: String,
    },
}
