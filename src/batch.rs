//! Cache-gated generation loop: render, compile, accumulate, persist.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::compiler::Compiler;
use crate::template;

/// Cache entries are joined with this, no trailing delimiter.
const DELIMITER: &str = ";";

/// Produce the cache file, or reuse it if it already exists.
///
/// The cache is presence-gated only: once the file is on disk its contents
/// are never re-checked against `count`. That is a deliberate build-once
/// behavior; delete the file to force a rebuild.
pub fn ensure_batch(count: u32, cache: &Path, scratch: &Path, compiler: &Compiler) -> Result<()> {
    if cache.exists() {
        println!("Cache {} present, skipping generation", cache.display());
        return Ok(());
    }

    let mut artifacts = Vec::<String>::with_capacity(count as usize);
    for idx in 0..count {
        if idx % 100 == 0 {
            println!("Compiling contract {}/{}", idx, count);
        }

        let source = template::render(idx);
        fs::write(scratch, &source).with_context(|| format!("Writing {}", scratch.display()))?;

        let artifact = compiler
            .compile(scratch)
            .with_context(|| format!("Compiling contract {idx}"))?;
        artifacts.push(artifact);
    }

    // Write through a sibling temp file so a failure cannot leave a partial
    // cache behind; a present-but-truncated file would be trusted forever.
    let joined = artifacts.join(DELIMITER);
    let tmp = cache.with_extension("tmp");
    fs::write(&tmp, &joined).with_context(|| format!("Writing {}", tmp.display()))?;
    fs::rename(&tmp, cache).with_context(|| format!("Moving {} into place", tmp.display()))?;

    println!("Wrote {} artifacts to {}", count, cache.display());
    Ok(())
}
