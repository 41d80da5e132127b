use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// How many contracts to generate and compile
    #[arg(long, default_value_t = 1000)]
    pub count: u32,
    /// Cache file holding the `;`-joined compiled batch
    #[arg(long, default_value = "smartCodes.txt")]
    pub cache: PathBuf,
    /// Scratch source file, overwritten once per contract
    #[arg(long, default_value = "test.sol")]
    pub scratch: PathBuf,
    /// External Solidity compiler binary
    #[arg(long, default_value = "solc")]
    pub compiler: PathBuf,
    /// External test-runner binary fed the finished cache file
    #[arg(long, default_value = "chainsqld")]
    pub runner: PathBuf,
    /// Unit-test suite selector passed to the runner
    #[arg(long, default_value = "VM")]
    pub suite: String,
}
