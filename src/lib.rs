pub mod batch;
pub mod cli;
pub mod compiler;
pub mod runner;
pub mod template;

use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Generate / reuse the compiled batch ────────────────────────
    let compiler = compiler::Compiler::new(&args.compiler);
    batch::ensure_batch(args.count, &args.cache, &args.scratch, &compiler)?;

    // 2. ── Feed it to the unit-test runner ────────────────────────────
    runner::run_tests(&args.runner, &args.suite, &args.cache);

    Ok(())
}
