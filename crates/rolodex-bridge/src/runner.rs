use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::error::{BridgeError, Result};

pub const DEFAULT_INTERPRETER: &str = "/usr/bin/osascript";

const EVAL_FLAG: &str = "-e";

/// Executes one script to completion or timeout.
pub trait ScriptRunner {
    fn run(&self, script: &str, timeout: Duration) -> Result<String>;
}

/// Spawns the external interpreter with the script passed inline as its
/// sole program argument.
#[derive(Debug, Clone)]
pub struct ExecRunner {
    program: PathBuf,
    eval_flag: String,
}

impl ExecRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            eval_flag: EVAL_FLAG.to_string(),
        }
    }

    /// Overrides the inline-eval flag; lets tests drive `/bin/sh -c`
    /// instead of osascript.
    pub fn with_eval_flag(program: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            eval_flag: flag.into(),
        }
    }
}

impl Default for ExecRunner {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl ScriptRunner for ExecRunner {
    /// On timeout the interpreter is killed and the result is an empty
    /// string, not an error: callers read "no output" as "no result",
    /// matching the not-found collapsing done inside the scripts. A slow
    /// write whose effect already landed externally is therefore silently
    /// missed; a timed-out read is indistinguishable from a genuine miss.
    fn run(&self, script: &str, timeout: Duration) -> Result<String> {
        let mut child = Command::new(&self.program)
            .arg(&self.eval_flag)
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let status = match child.wait_timeout(timeout)? {
            Some(status) => status,
            None => {
                warn!(
                    timeout_secs = timeout.as_secs(),
                    "script timed out, terminating interpreter"
                );
                let _ = child.kill();
                let _ = child.wait();
                return Ok(String::new());
            }
        };

        let output = child.wait_with_output()?;
        if !status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("interpreter exited with status {status}")
            } else {
                stderr.trim().to_string()
            };
            return Err(BridgeError::Script(message));
        }

        debug!(bytes = output.stdout.len(), "script completed");
        let stdout = String::from_utf8(output.stdout).map_err(|_| BridgeError::Utf8)?;
        Ok(stdout.trim().to_string())
    }
}
