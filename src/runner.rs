//! Hand the finished cache file to the external unit-test runner.

use std::path::Path;
use std::process::Command;

/// Invoke the runner and relay its streams verbatim.
///
/// Runner failures are reported, never propagated: the batch itself already
/// succeeded, and the runner's own output is the interesting part.
pub fn run_tests(runner: &Path, suite: &str, cache: &Path) {
    let result = Command::new(runner)
        .arg(format!("--unittest={suite}"))
        .arg(format!("--unittest-arg=file={}", cache.display()))
        .output();

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Failed to launch test runner {}: {}", runner.display(), e);
            return;
        }
    };

    if !output.stdout.is_empty() {
        print!("{}", String::from_utf8_lossy(&output.stdout));
    }
    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }
    if !output.status.success() {
        eprintln!("Test runner exited with {}", output.status);
    }
}
