//! External compiler invocation and bytecode extraction.

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

/// Position of the stdout token carrying the bytecode.
/// `solc --bin` prints a `=======` banner line, a `Binary:` label line,
/// then the hex blob itself.
const BYTECODE_TOKEN: usize = 2;

pub struct Compiler {
    program: PathBuf,
}

impl Compiler {
    pub fn new(program: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
        }
    }

    /// Compile `source` synchronously and return the bytecode token from
    /// the compiler's stdout. A launch failure or a nonzero exit is an
    /// error; the caller aborts the whole batch on it.
    pub fn compile(&self, source: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--bin")
            .arg(source)
            .output()
            .with_context(|| format!("Launching compiler {}", self.program.display()))?;

        if !output.status.success() {
            return Err(anyhow!(
                "compiler exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        extract_bytecode(&stdout)
    }
}

/// One maximal non-empty line; excludes `\r` so CRLF output yields clean
/// tokens rather than `\r`-suffixed ones.
static LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\r\n]+").expect("valid pattern"));

/// Pick the third non-empty line token out of the compiler's stdout.
pub fn extract_bytecode(stdout: &str) -> Result<String> {
    LINE.find_iter(stdout)
        .nth(BYTECODE_TOKEN)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            anyhow!(
                "compiler output has fewer than {} non-empty lines",
                BYTECODE_TOKEN + 1
            )
        })
}
