//! ndd: query deployment configuration from the command line

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
