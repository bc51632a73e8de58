//! Command-line front end for recsplit.
//!
//! Each subcommand loads a source, splits it, and prints the chunk count
//! followed by one sample chunk:
//!
//! - `pdf` - character splitter over every PDF page (200 chars, shows chunk 0)
//! - `markdown` - Markdown preset (400 chars, shows chunk 2)
//! - `code` - language preset over a built-in Python sample (310 chars, shows chunk 1)
//! - `split` - fully configurable recursive splitter

mod args;
mod commands;

pub use args::{ChunkArgs, Cli, Command, KeepArg};
pub use commands::{PYTHON_SAMPLE, run};
