//! Main entrypoint for the L1 info indexer CLI.

use clap::Parser;

mod node;

fn main() -> anyhow::Result<()> {
    node::Cli::parse().run()
}
