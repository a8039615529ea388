//! # Inkpost CLI
//!
//! Terminal front end for the Inkpost API: list, browse, show, create, edit
//! and delete posts.

mod args;
mod commands;

use clap::Parser;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::run(cli).await
}
