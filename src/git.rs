// Git publishing: stage the links file, commit it and push. Each step runs
// the `git` binary as a subprocess; the first failing step stops the
// sequence and its stderr is handed back to the UI.

use crate::error::GitError;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, info};

/// Commit message used when the user leaves the prompt blank.
pub fn default_commit_message(now: NaiveDateTime) -> String {
    format!("Update links configuration - {}", now.format("%Y-%m-%d %H:%M"))
}

/// Runs git commands inside `workdir`.
#[derive(Debug, Clone)]
pub struct GitPublisher {
    program: PathBuf,
    workdir: PathBuf,
}

impl GitPublisher {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        GitPublisher {
            program: PathBuf::from("git"),
            workdir: workdir.into(),
        }
    }

    /// Use a different git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Fails with [`GitError::NotARepository`] when `git status` cannot
    /// run or reports an error.
    pub fn check_repository(&self) -> Result<(), GitError> {
        match self.command().arg("status").output() {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                debug!(stderr = %stderr.trim(), "git status failed");
                Err(GitError::NotARepository)
            }
            Err(e) => {
                debug!(error = %e, "could not run git");
                Err(GitError::NotARepository)
            }
        }
    }

    /// `git add <file>`, `git commit -m <message>`, `git push`.
    pub fn publish(&self, file: &Path, message: &str) -> Result<(), GitError> {
        let file_arg = file.to_string_lossy();
        self.run("add", &[&*file_arg])?;
        self.run("commit", &["-m", message])?;
        self.run("push", &[])?;
        info!(file = %file.display(), "published links file");
        Ok(())
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        // stdin is closed under `output()`; fail instead of waiting on a tty
        cmd.current_dir(&self.workdir).env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }

    fn run(&self, step: &'static str, args: &[&str]) -> Result<Output, GitError> {
        debug!(step, ?args, "running git");
        let out = self
            .command()
            .arg(step)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn { step, source })?;
        if !out.status.success() {
            return Err(GitError::StepFailed {
                step,
                status: out.status,
                output: failure_output(&out),
            });
        }
        Ok(out)
    }
}

fn failure_output(out: &Output) -> String {
    let stderr = String::from_utf8_lossy(&out.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}
