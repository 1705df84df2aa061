//! Equivalency lookup backed by an external script

use super::{EquivalencyLookup, EquivalencyRow, LookupError, TransferQuery};
use crate::{debug, info, warn};
use serde::Deserialize;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs `program script <args>` and reads the rows it prints as JSON
#[derive(Debug, Clone)]
pub struct ScriptLookup {
    program: PathBuf,
    script: PathBuf,
    timeout: Duration,
}

/// What the script prints on stdout
#[derive(Debug, Deserialize)]
struct ScriptOutput {
    #[serde(default)]
    rows: Option<Vec<EquivalencyRow>>,
    #[serde(default)]
    error: Option<String>,
}

impl ScriptLookup {
    /// Create a lookup running `script` with `program`
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set how long to wait before killing the script
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Interpreter that will run the script
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list passed to the interpreter
    #[must_use]
    pub fn command_args(&self, query: &TransferQuery) -> Vec<String> {
        let mut args = vec![self.script.display().to_string()];
        args.extend(query.to_args());
        args
    }

    fn spawn(&self, query: &TransferQuery) -> Result<Child, LookupError> {
        Command::new(&self.program)
            .args(self.command_args(query))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    LookupError::ProcessNotFound {
                        program: self.program.display().to_string(),
                    }
                } else {
                    LookupError::Spawn {
                        message: err.to_string(),
                    }
                }
            })
    }

    /// Poll the child until it exits or the timeout passes. On timeout the
    /// child is killed.
    fn wait_with_timeout(&self, child: &mut Child) -> Result<ExitStatus, LookupError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    terminate(child);
                    warn!("Transfer lookup killed after {:?}", self.timeout);
                    return Err(LookupError::Timeout {
                        after: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(err) => {
                    terminate(child);
                    return Err(LookupError::Spawn {
                        message: err.to_string(),
                    });
                }
            }
        }
    }
}

impl EquivalencyLookup for ScriptLookup {
    fn lookup(&self, query: &TransferQuery) -> Result<Vec<EquivalencyRow>, LookupError> {
        query.validate()?;
        if !self.script.exists() {
            return Err(LookupError::ProcessNotFound {
                program: self.script.display().to_string(),
            });
        }

        debug!(
            "Running {} {}",
            self.program.display(),
            self.command_args(query).join(" ")
        );
        let mut child = self.spawn(query)?;

        // Drain both pipes so the child never blocks on a full buffer.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait_with_timeout(&mut child)?;
        let stdout = join_output(stdout);
        let stderr = join_output(stderr);

        let rows = parse_script_output(&stdout, &stderr, status.success(), status.code())?;
        info!("Transfer lookup returned {} rows", rows.len());
        Ok(rows)
    }
}

/// Kill the child and reap it so no zombie is left behind
fn terminate(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = pipe.read_to_string(&mut buf);
            buf
        })
    })
}

fn join_output(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

/// Interpret what the script printed.
///
/// A successful exit with a `rows` array yields the rows. An `error` field is
/// reported as the script's own message whatever the exit status.
///
/// # Errors
/// Returns `Script`, `NonZeroExit` or `MalformedOutput` depending on what went
/// wrong
pub fn parse_script_output(
    stdout: &str,
    stderr: &str,
    success: bool,
    code: Option<i32>,
) -> Result<Vec<EquivalencyRow>, LookupError> {
    let text = if stdout.trim().is_empty() { "{}" } else { stdout };

    let parsed: ScriptOutput = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(err) if success => {
            return Err(LookupError::MalformedOutput {
                message: err.to_string(),
            })
        }
        Err(_) => {
            return Err(LookupError::NonZeroExit {
                code,
                stderr: stderr.trim().to_string(),
            })
        }
    };

    if let Some(message) = parsed.error.filter(|m| !m.trim().is_empty()) {
        return Err(LookupError::Script { message });
    }

    match parsed.rows {
        Some(rows) if success => Ok(rows),
        _ if !success => Err(LookupError::NonZeroExit {
            code,
            stderr: stderr.trim().to_string(),
        }),
        _ => Err(LookupError::MalformedOutput {
            message: "missing 'rows' array".to_string(),
        }),
    }
}

/// Pick the interpreter for the lookup script.
///
/// A configured program wins. Otherwise a virtualenv next to `root`
/// (`../.venv/bin/python`, then `.venv/bin/python`) is used when present,
/// falling back to `python3` on the `PATH`.
#[must_use]
pub fn resolve_interpreter(configured: &str, root: &Path) -> PathBuf {
    if !configured.trim().is_empty() {
        return PathBuf::from(configured.trim());
    }

    let candidates = [
        root.join("..").join(".venv").join("bin").join("python"),
        root.join(".venv").join("bin").join("python"),
    ];
    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from("python3"))
}
