//! `recsplit` binary.
//!
//! # Usage
//!
//! ```bash
//! # Split a PDF into 200-character chunks and show the first one
//! cargo run -p recsplit-cli -- pdf indian_economy_report_2025.pdf
//!
//! # Split a Markdown file with the Markdown preset and show chunk 2
//! cargo run -p recsplit-cli -- markdown README.md
//!
//! # Split the built-in Python sample
//! cargo run -p recsplit-cli -- code
//!
//! # Custom separators, everything as JSON
//! cargo run -p recsplit-cli -- split notes.txt --separator $'\n\n' --separator '' --json
//!
//! # Log splitting decisions
//! RUST_LOG=recsplit_core=debug cargo run -p recsplit-cli -- code
//! ```

use std::io;

use anyhow::Result;
use clap::Parser;
use recsplit_cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
